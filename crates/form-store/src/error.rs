use seek_syntax::SyntaxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Sled(#[from] sled::Error),

    #[error("Failed to encode form record: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Saving would replace an existing form and the caller did not confirm.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("a form named '{name}' already exists")]
pub struct ConflictError {
    pub name: String,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error("no form named '{0}' is visible")]
    NotFound(String),

    #[error("form name must not be empty")]
    EmptyName,

    #[error("{0} must not contain NUL characters")]
    NulCharacter(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("stored form is unreadable: {0}")]
    Syntax(#[from] SyntaxError),
}
