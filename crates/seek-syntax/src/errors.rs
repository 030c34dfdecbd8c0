use crate::ast::path::TermPath;
use model::errors::NotFoundError;
use thiserror::Error;

/// A sequence, or a document carrying one, does not have the alternating
/// term/join shape, or a mutation addressed a slot that does not exist.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructuralError {
    #[error("sequence at {at} has no terms")]
    Empty { at: TermPath },

    #[error("{joins} join operators cannot connect {terms} terms")]
    ArityMismatch { terms: usize, joins: usize },

    #[error("sequence at {at} is not an array")]
    NotAnArray { at: TermPath },

    #[error("expected a condition or a group at element {index} of the sequence at {at}")]
    ExpectedTerm { at: TermPath, index: usize },

    #[error("expected \"and\" or \"or\" at element {index} of the sequence at {at}")]
    ExpectedJoin { at: TermPath, index: usize },

    #[error("sequence at {at} ends with a join operator")]
    TrailingJoin { at: TermPath },

    #[error("cannot insert a term at position {position} of a sequence with {len} terms")]
    InvalidPosition { position: usize, len: usize },

    #[error("no term at index {index} of a sequence with {len} terms")]
    TermOutOfRange { index: usize, len: usize },

    #[error("no join operator follows term {index} of a sequence with {len} terms")]
    JoinOutOfRange { index: usize, len: usize },

    #[error("form document is not a JSON object")]
    NotAnObject,

    #[error("form document has no '{0}' entry")]
    MissingKey(&'static str),

    #[error("invalid form parameter '{key}': {reason}")]
    InvalidParameter { key: String, reason: String },
}

/// Why a condition was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationReason {
    #[error("condition has no '{0}' entry")]
    MissingKey(&'static str),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("operator '{operator}' is not allowed for field '{field}'")]
    OperatorNotAllowed { field: String, operator: String },

    #[error("field '{field}' expects {expected}")]
    InvalidValue { field: String, expected: &'static str },

    #[error("'{key}' is not a choice of field '{field}'")]
    UnknownChoice { field: String, key: String },

    #[error("'{id}' is not a known identifier for field '{field}'")]
    UnknownIdentifier { field: String, id: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid condition at {path}: {reason}")]
pub struct ValidationError {
    pub path: TermPath,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(path: TermPath, reason: ValidationReason) -> Self {
        Self { path, reason }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("cannot remove the last term of a sequence")]
pub struct LastFieldRemovalError;

#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    LastFieldRemoval(#[from] LastFieldRemovalError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("form document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
