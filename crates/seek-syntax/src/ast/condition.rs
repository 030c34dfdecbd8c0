use model::{
    core::value::Value,
    fields::{FieldType, Operator},
};

/// The value half of a condition. Its shape is dictated by the field type.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    /// Free text of a string field.
    Text(String),
    /// Inclusive bounds of a range field, kept as submitted.
    Range(Value, Value),
    /// Choice key of a value list field.
    Choice(String),
    /// Identifier resolved through an autocomplete lookup.
    Identifier(String),
}

impl ConditionValue {
    /// Name of the value shape a field type expects, for error messages.
    pub fn expected_for(field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::String => "a text value",
            FieldType::Range => "a [min, max] pair",
            FieldType::ValueList => "a choice key",
            FieldType::Autocomplete => "a lookup identifier",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Field label, resolved against the registry.
    pub field: String,
    pub operator: Operator,
    pub value: ConditionValue,
}

impl Condition {
    pub fn new(field: &str, operator: Operator, value: ConditionValue) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value,
        }
    }

    pub fn text(field: &str, operator: Operator, text: &str) -> Self {
        Self::new(field, operator, ConditionValue::Text(text.to_string()))
    }

    pub fn range(field: &str, operator: Operator, min: Value, max: Value) -> Self {
        Self::new(field, operator, ConditionValue::Range(min, max))
    }

    pub fn choice(field: &str, operator: Operator, key: &str) -> Self {
        Self::new(field, operator, ConditionValue::Choice(key.to_string()))
    }

    pub fn identifier(field: &str, operator: Operator, id: &str) -> Self {
        Self::new(field, operator, ConditionValue::Identifier(id.to_string()))
    }
}
