//! In-memory backend: evaluates compiled predicates against rows and sorts
//! the matches by a compiled ordering.

pub mod error;
pub mod eval;
pub mod execute;
pub mod sort;

pub use error::{ExpressionError, Result};
pub use eval::Evaluator;
pub use execute::{execute, filter};
pub use sort::sort_rows;
