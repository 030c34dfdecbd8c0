use crate::{
    fields::{
        kind::{Choice, FieldKind, FieldType},
        operator::Operator,
    },
    lookup::Lookup,
};
use std::sync::Arc;

/// A searchable field of the catalog.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Display name, unique within a registry. Forms refer to fields by it.
    pub label: String,
    /// Backend attribute the field compiles against.
    pub column: String,
    pub kind: FieldKind,
    /// Allowed operators, in presentation order.
    pub operators: Vec<Operator>,
    /// Non-public fields are only offered to privileged callers.
    pub public: bool,
}

impl FieldDefinition {
    fn with_kind(label: &str, column: &str, kind: FieldKind) -> Self {
        let operators = Operator::allowed_for(kind.field_type()).to_vec();
        Self {
            label: label.to_string(),
            column: column.to_string(),
            kind,
            operators,
            public: true,
        }
    }

    pub fn string(label: &str, column: &str) -> Self {
        Self::with_kind(label, column, FieldKind::String)
    }

    pub fn range(label: &str, column: &str) -> Self {
        Self::with_kind(label, column, FieldKind::Range)
    }

    pub fn value_list(label: &str, column: &str, choices: Vec<Choice>) -> Self {
        Self::with_kind(label, column, FieldKind::ValueList { choices })
    }

    pub fn autocomplete(label: &str, column: &str, lookup: Arc<dyn Lookup>) -> Self {
        Self::with_kind(label, column, FieldKind::Autocomplete { lookup })
    }

    /// Replaces the default operator set. Checked when registered.
    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.operators = operators;
        self
    }

    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    pub fn allows(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }
}
