pub mod ast;
pub mod codec;
pub mod describe;
pub mod errors;
pub mod semantic;

pub use ast::{
    condition::{Condition, ConditionValue},
    join::JoinOp,
    path::TermPath,
    sequence::Sequence,
    term::Term,
};
pub use codec::{deserialize, form::FormData, serialize};
pub use describe::describe;
pub use errors::{
    LastFieldRemovalError, StructuralError, SyntaxError, ValidationError, ValidationReason,
};
pub use semantic::validator::validate;
