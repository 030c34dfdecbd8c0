//! Backend-neutral predicate tree produced by the compiler.

use model::core::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a text pattern is matched. All modes ignore case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    Contains,
    Exact,
    Prefix,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Text {
        column: String,
        mode: TextMode,
        pattern: String,
    },
    /// Inclusive on both ends.
    Range {
        column: String,
        min: Value,
        max: Value,
    },
    Equals {
        column: String,
        value: Value,
    },
    Not(Box<Predicate>),
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    pub fn not(inner: Predicate) -> Self {
        Predicate::Not(Box::new(inner))
    }

    pub fn and(left: Predicate, right: Predicate) -> Self {
        Predicate::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Predicate, right: Predicate) -> Self {
        Predicate::Or(Box::new(left), Box::new(right))
    }

    /// Number of leaf comparisons in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Predicate::Text { .. } | Predicate::Range { .. } | Predicate::Equals { .. } => 1,
            Predicate::Not(inner) => inner.leaf_count(),
            Predicate::And(l, r) | Predicate::Or(l, r) => l.leaf_count() + r.leaf_count(),
        }
    }
}

impl fmt::Display for TextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMode::Contains => write!(f, "contains"),
            TextMode::Exact => write!(f, "equals"),
            TextMode::Prefix => write!(f, "starts with"),
        }
    }
}

/// Fully parenthesised rendering, useful in logs.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Text {
                column,
                mode,
                pattern,
            } => write!(f, "{column} {mode} '{pattern}'"),
            Predicate::Range { column, min, max } => write!(f, "{column} in [{min}, {max}]"),
            Predicate::Equals { column, value } => write!(f, "{column} = {value}"),
            Predicate::Not(inner) => write!(f, "NOT ({inner})"),
            Predicate::And(l, r) => write!(f, "({l} AND {r})"),
            Predicate::Or(l, r) => write!(f, "({l} OR {r})"),
        }
    }
}
