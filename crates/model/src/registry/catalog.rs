//! JSON catalog describing a registry, for deployments that configure the
//! searchable fields instead of compiling them in.

use crate::{
    errors::RegistryError,
    fields::{Choice, FieldDefinition, FieldType, Operator},
    lookup::{LookupEntry, StaticLookup},
    ordering::OrderableField,
    registry::{Registry, RegistryBuilder},
    report::ReportType,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub fields: Vec<FieldConfig>,
    #[serde(default)]
    pub ordering: Vec<OrderableField>,
    #[serde(default)]
    pub report_types: Vec<ReportType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub label: String,
    /// Defaults to the label.
    #[serde(default)]
    pub column: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Operator tokens; the type's full set when omitted.
    #[serde(default)]
    pub operators: Option<Vec<String>>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Entries served by the static lookup of an autocomplete field.
    #[serde(default)]
    pub entries: Vec<LookupEntry>,
    #[serde(default = "default_public")]
    pub public: bool,
}

fn default_public() -> bool {
    true
}

impl RegistryConfig {
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

impl FieldConfig {
    fn to_definition(&self) -> Result<FieldDefinition, RegistryError> {
        let column = self.column.as_deref().unwrap_or(&self.label);

        let mut definition = match self.field_type {
            FieldType::String => FieldDefinition::string(&self.label, column),
            FieldType::Range => FieldDefinition::range(&self.label, column),
            FieldType::ValueList => {
                FieldDefinition::value_list(&self.label, column, self.choices.clone())
            }
            FieldType::Autocomplete => {
                let lookup = StaticLookup::new(&self.label, self.entries.clone());
                FieldDefinition::autocomplete(&self.label, column, Arc::new(lookup))
            }
        };

        if let Some(tokens) = &self.operators {
            let operators = tokens
                .iter()
                .map(|t| t.parse::<Operator>())
                .collect::<Result<Vec<_>, _>>()?;
            definition = definition.with_operators(operators);
        }

        if !self.public {
            definition = definition.private();
        }

        Ok(definition)
    }
}

impl Registry {
    pub fn from_config(config: &RegistryConfig) -> Result<Registry, RegistryError> {
        let mut builder = RegistryBuilder::new();
        for field in &config.fields {
            builder = builder.register(field.to_definition()?);
        }
        for field in &config.ordering {
            builder = builder.orderable(field.clone());
        }
        for report in &config.report_types {
            builder = builder.report_type(report.clone());
        }
        builder.build()
    }
}
