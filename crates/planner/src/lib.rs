pub mod compiler;
pub mod error;
pub mod ordering;
pub mod predicate;
pub mod query;

pub use compiler::compile;
pub use error::PlannerError;
pub use ordering::{SortKey, compile_ordering};
pub use predicate::{Predicate, TextMode};
pub use query::search::SearchQuery;
