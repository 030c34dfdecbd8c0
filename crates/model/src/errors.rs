use thiserror::Error;

/// A label did not resolve against the registry or a lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("unknown field '{0}'")]
    Field(String),

    #[error("unknown orderable field '{0}'")]
    OrderableField(String),

    #[error("unknown report type '{0}'")]
    ReportType(String),

    #[error("no entry with id '{id}' in lookup for field '{field}'")]
    LookupEntry { field: String, id: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("report type '{report_type}' requires elevated privileges")]
pub struct AuthorizationError {
    pub report_type: String,
}

/// Failures of the report type gate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Unauthorized(#[from] AuthorizationError),
}

/// Problems detected while assembling a registry at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("field label '{0}' is registered twice")]
    DuplicateField(String),

    #[error("field '{0}' declares no operators")]
    NoOperators(String),

    #[error("operator '{operator}' is not valid for {field_type} field '{field}'")]
    IncompatibleOperator {
        field: String,
        field_type: String,
        operator: String,
    },

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("unknown field type '{0}'")]
    UnknownFieldType(String),

    #[error("value list field '{0}' declares no choices")]
    NoChoices(String),

    #[error("value list field '{field}' declares choice '{key}' twice")]
    DuplicateChoice { field: String, key: String },

    #[error("orderable field '{0}' is registered twice")]
    DuplicateOrderable(String),

    #[error("report type '{0}' is registered twice")]
    DuplicateReportType(String),
}
