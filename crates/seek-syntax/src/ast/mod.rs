pub mod condition;
pub mod join;
pub mod path;
pub mod sequence;
pub mod term;
pub mod visitor;
