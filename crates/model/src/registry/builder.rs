use crate::{
    errors::RegistryError,
    fields::{FieldDefinition, FieldKind, Operator},
    ordering::OrderableField,
    registry::Registry,
    report::ReportType,
};
use std::collections::HashSet;
use tracing::debug;

/// Collects definitions and checks them all in `build`.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    fields: Vec<FieldDefinition>,
    orderable: Vec<OrderableField>,
    report_types: Vec<ReportType>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, definition: FieldDefinition) -> Self {
        self.fields.push(definition);
        self
    }

    pub fn orderable(mut self, field: OrderableField) -> Self {
        self.orderable.push(field);
        self
    }

    pub fn report_type(mut self, report_type: ReportType) -> Self {
        self.report_types.push(report_type);
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut labels = HashSet::new();
        for field in &self.fields {
            if !labels.insert(field.label.as_str()) {
                return Err(RegistryError::DuplicateField(field.label.clone()));
            }
            check_field(field)?;
        }

        let mut orderable = HashSet::new();
        for field in &self.orderable {
            if !orderable.insert(field.label.as_str()) {
                return Err(RegistryError::DuplicateOrderable(field.label.clone()));
            }
        }

        let mut reports = HashSet::new();
        for report in &self.report_types {
            if !reports.insert(report.label.as_str()) {
                return Err(RegistryError::DuplicateReportType(report.label.clone()));
            }
        }

        debug!(
            "Built registry with {} fields, {} orderable fields, {} report types",
            self.fields.len(),
            self.orderable.len(),
            self.report_types.len()
        );

        Ok(Registry::from_parts(
            self.fields,
            self.orderable,
            self.report_types,
        ))
    }
}

fn check_field(field: &FieldDefinition) -> Result<(), RegistryError> {
    if field.operators.is_empty() {
        return Err(RegistryError::NoOperators(field.label.clone()));
    }

    let allowed = Operator::allowed_for(field.field_type());
    if let Some(op) = field.operators.iter().find(|op| !allowed.contains(op)) {
        return Err(RegistryError::IncompatibleOperator {
            field: field.label.clone(),
            field_type: field.field_type().to_string(),
            operator: op.to_string(),
        });
    }

    if let FieldKind::ValueList { choices } = &field.kind {
        if choices.is_empty() {
            return Err(RegistryError::NoChoices(field.label.clone()));
        }
        let mut keys = HashSet::new();
        for choice in choices {
            if !keys.insert(choice.key.as_str()) {
                return Err(RegistryError::DuplicateChoice {
                    field: field.label.clone(),
                    key: choice.key.clone(),
                });
            }
        }
    }

    Ok(())
}
