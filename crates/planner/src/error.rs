use model::errors::NotFoundError;
use seek_syntax::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}
