pub mod definition;
pub mod kind;
pub mod operator;

pub use definition::FieldDefinition;
pub use kind::{Choice, FieldKind, FieldType};
pub use operator::Operator;
