use expression_engine::ExpressionError;
use form_store::{ServiceError, error::StoreError};
use model::errors::{GateError, RegistryError};
use planner::PlannerError;
use seek_syntax::SyntaxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid registry catalog: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid form: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Failed to compile form: {0}")]
    Planner(#[from] PlannerError),

    #[error("Search failed: {0}")]
    Expression(#[from] ExpressionError),

    #[error("Report type rejected: {0}")]
    Gate(#[from] GateError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Form store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid records file: {0}")]
    InvalidData(String),
}
