use planner::PlannerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error("Failed to compile form: {0}")]
    Compile(#[from] PlannerError),
}

pub type Result<T> = std::result::Result<T, ExpressionError>;
