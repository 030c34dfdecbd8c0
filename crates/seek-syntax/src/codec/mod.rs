//! Interchange format: the JSON shape forms travel and persist in.
//!
//! ```text
//! [{"field": "Year", "operation": "in", "value": ["1999", "2000"]},
//!  "or",
//!  [{"field": "Language", "operation": "eq", "value": "english"}]]
//! ```

pub mod expression;
pub mod form;
pub mod ordering;

pub use expression::{deserialize, serialize};

pub const FIELD_KEY: &str = "field";
pub const OPERATION_KEY: &str = "operation";
pub const VALUE_KEY: &str = "value";
