use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// A single entity as seen by an in-memory backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    /// Builds a row from a flat JSON object, one field per key.
    pub fn from_json(entity: &str, object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let field_values = object
            .iter()
            .map(|(name, value)| FieldValue {
                name: name.clone(),
                value: Some(Value::from_json(value)),
            })
            .collect();

        RowData::new(entity, field_values)
    }

    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .field_values
            .iter()
            .map(|f| {
                let value = f
                    .value
                    .as_ref()
                    .map(Value::to_json)
                    .unwrap_or(serde_json::Value::Null);
                (f.name.clone(), value)
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(object)
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}
