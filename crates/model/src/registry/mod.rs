//! The field registry: an immutable catalog of searchable fields, orderable
//! fields and report types. It is built once at startup and handed by
//! reference to everything that validates, compiles or describes a form.

use crate::{
    errors::NotFoundError,
    fields::FieldDefinition,
    ordering::OrderableField,
    report::ReportType,
};
use std::collections::HashMap;

pub mod builder;
pub mod catalog;

pub use builder::RegistryBuilder;
pub use catalog::RegistryConfig;

#[derive(Debug, Clone)]
pub struct Registry {
    fields: Vec<FieldDefinition>,
    by_label: HashMap<String, usize>,
    orderable: Vec<OrderableField>,
    report_types: Vec<ReportType>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn from_parts(
        fields: Vec<FieldDefinition>,
        orderable: Vec<OrderableField>,
        report_types: Vec<ReportType>,
    ) -> Self {
        let by_label = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.label.clone(), i))
            .collect();

        Self {
            fields,
            by_label,
            orderable,
            report_types,
        }
    }

    pub fn by_label(&self, label: &str) -> Result<&FieldDefinition, NotFoundError> {
        self.by_label
            .get(label)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| NotFoundError::Field(label.to_string()))
    }

    /// All fields in registration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Fields the caller may build conditions on.
    pub fn visible_fields(&self, privileged: bool) -> Vec<&FieldDefinition> {
        self.fields
            .iter()
            .filter(|f| privileged || f.public)
            .collect()
    }

    pub fn orderable_fields(&self) -> &[OrderableField] {
        &self.orderable
    }

    pub fn orderable_by_label(&self, label: &str) -> Result<&OrderableField, NotFoundError> {
        self.orderable
            .iter()
            .find(|o| o.label == label)
            .ok_or_else(|| NotFoundError::OrderableField(label.to_string()))
    }

    pub fn report_types(&self) -> &[ReportType] {
        &self.report_types
    }
}
