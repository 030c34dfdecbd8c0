use serde::{Deserialize, Serialize};
use std::fmt;

/// Connective between two adjacent terms of a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinOp {
    #[default]
    And,
    Or,
}

impl JoinOp {
    pub fn token(&self) -> &'static str {
        match self {
            JoinOp::And => "and",
            JoinOp::Or => "or",
        }
    }

    pub fn from_token(token: &str) -> Option<JoinOp> {
        match token {
            "and" => Some(JoinOp::And),
            "or" => Some(JoinOp::Or),
            _ => None,
        }
    }
}

impl fmt::Display for JoinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
