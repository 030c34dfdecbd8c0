use crate::{errors::RegistryError, lookup::Lookup};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

/// The type tag of a field, without its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    String,
    Range,
    ValueList,
    Autocomplete,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Range => write!(f, "range"),
            FieldType::ValueList => write!(f, "value-list"),
            FieldType::Autocomplete => write!(f, "autocomplete"),
        }
    }
}

impl FromStr for FieldType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(FieldType::String),
            "range" => Ok(FieldType::Range),
            "value-list" => Ok(FieldType::ValueList),
            "autocomplete" => Ok(FieldType::Autocomplete),
            other => Err(RegistryError::UnknownFieldType(other.to_string())),
        }
    }
}

/// One selectable entry of a value list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub key: String,
    pub label: String,
}

impl Choice {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A field's type together with its type-specific configuration.
#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    Range,
    ValueList { choices: Vec<Choice> },
    Autocomplete { lookup: Arc<dyn Lookup> },
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::String => FieldType::String,
            FieldKind::Range => FieldType::Range,
            FieldKind::ValueList { .. } => FieldType::ValueList,
            FieldKind::Autocomplete { .. } => FieldType::Autocomplete,
        }
    }

    pub fn choices(&self) -> Option<&[Choice]> {
        match self {
            FieldKind::ValueList { choices } => Some(choices),
            _ => None,
        }
    }

    /// Display label of a value list choice, if this is a value list
    /// containing `key`.
    pub fn choice_label(&self, key: &str) -> Option<&str> {
        match self {
            FieldKind::ValueList { choices } => choices
                .iter()
                .find(|c| c.key == key)
                .map(|c| c.label.as_str()),
            _ => None,
        }
    }
}
