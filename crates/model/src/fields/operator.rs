use crate::{errors::RegistryError, fields::kind::FieldType};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Operator tokens a condition can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Contains,
    NotContains,
    Equal,
    NotEqual,
    StartsWith,
    NotStartsWith,
    InRange,
    NotInRange,
}

pub const STRING_OPS: &[Operator] = &[
    Operator::Contains,
    Operator::NotContains,
    Operator::Equal,
    Operator::NotEqual,
    Operator::StartsWith,
    Operator::NotStartsWith,
];

pub const RANGE_OPS: &[Operator] = &[Operator::InRange, Operator::NotInRange];

pub const EQUALITY_OPS: &[Operator] = &[Operator::Equal, Operator::NotEqual];

impl Operator {
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Contains => "contains",
            Operator::NotContains => "not contains",
            Operator::Equal => "eq",
            Operator::NotEqual => "neq",
            Operator::StartsWith => "starts with",
            Operator::NotStartsWith => "not starts with",
            Operator::InRange => "in",
            Operator::NotInRange => "not in",
        }
    }

    /// True for the complement half of each operator pair.
    pub fn is_negated(&self) -> bool {
        matches!(
            self,
            Operator::NotContains
                | Operator::NotEqual
                | Operator::NotStartsWith
                | Operator::NotInRange
        )
    }

    /// The operator with the negation stripped.
    pub fn positive(&self) -> Operator {
        match self {
            Operator::NotContains => Operator::Contains,
            Operator::NotEqual => Operator::Equal,
            Operator::NotStartsWith => Operator::StartsWith,
            Operator::NotInRange => Operator::InRange,
            other => *other,
        }
    }

    /// Operators a field of the given type may ever carry.
    pub fn allowed_for(field_type: FieldType) -> &'static [Operator] {
        match field_type {
            FieldType::String => STRING_OPS,
            FieldType::Range => RANGE_OPS,
            FieldType::ValueList => EQUALITY_OPS,
            FieldType::Autocomplete => EQUALITY_OPS,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Operator {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(Operator::Contains),
            "not contains" => Ok(Operator::NotContains),
            "eq" => Ok(Operator::Equal),
            "neq" => Ok(Operator::NotEqual),
            "starts with" => Ok(Operator::StartsWith),
            "not starts with" => Ok(Operator::NotStartsWith),
            "in" => Ok(Operator::InRange),
            "not in" => Ok(Operator::NotInRange),
            other => Err(RegistryError::UnknownOperator(other.to_string())),
        }
    }
}
