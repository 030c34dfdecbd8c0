pub mod core;
pub mod errors;
pub mod fields;
pub mod lookup;
pub mod ordering;
pub mod records;
pub mod registry;
pub mod report;
