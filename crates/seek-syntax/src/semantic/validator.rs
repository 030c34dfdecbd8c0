use crate::{
    ast::{
        condition::{Condition, ConditionValue},
        path::TermPath,
        sequence::Sequence,
        visitor::{TermVisitor, walk},
    },
    errors::{ValidationError, ValidationReason},
};
use model::{
    core::value::Value,
    fields::{FieldDefinition, FieldKind},
    registry::Registry,
};
use std::ops::ControlFlow;
use tracing::debug;

/// Semantic validator checking every condition against the registry
struct SemanticValidator<'r> {
    registry: &'r Registry,
    checked: usize,
}

impl TermVisitor for SemanticValidator<'_> {
    type Break = ValidationError;

    fn visit_condition(
        &mut self,
        path: &TermPath,
        condition: &Condition,
    ) -> ControlFlow<ValidationError> {
        self.checked += 1;
        match validate_condition(condition, self.registry) {
            Ok(_) => ControlFlow::Continue(()),
            Err(reason) => ControlFlow::Break(ValidationError::new(path.clone(), reason)),
        }
    }
}

/// Validates a whole sequence, reporting the first offending condition.
pub fn validate(sequence: &Sequence, registry: &Registry) -> Result<(), ValidationError> {
    let mut validator = SemanticValidator {
        registry,
        checked: 0,
    };

    match walk(sequence, &mut validator) {
        ControlFlow::Continue(()) => {
            debug!("Validated {} conditions", validator.checked);
            Ok(())
        }
        ControlFlow::Break(err) => {
            debug!("Validation failed: {}", err);
            Err(err)
        }
    }
}

/// Checks field, operator and value shape of a single condition.
pub fn validate_condition<'r>(
    condition: &Condition,
    registry: &'r Registry,
) -> Result<&'r FieldDefinition, ValidationReason> {
    let field = registry
        .by_label(&condition.field)
        .map_err(|_| ValidationReason::UnknownField(condition.field.clone()))?;

    if !field.allows(condition.operator) {
        return Err(ValidationReason::OperatorNotAllowed {
            field: field.label.clone(),
            operator: condition.operator.to_string(),
        });
    }

    check_value(field, &condition.value)?;
    Ok(field)
}

fn check_value(field: &FieldDefinition, value: &ConditionValue) -> Result<(), ValidationReason> {
    let shape_error = || ValidationReason::InvalidValue {
        field: field.label.clone(),
        expected: ConditionValue::expected_for(field.field_type()),
    };

    match &field.kind {
        FieldKind::String => match value {
            ConditionValue::Text(_) => Ok(()),
            _ => Err(shape_error()),
        },
        FieldKind::Range => match value {
            ConditionValue::Range(min, max) if is_bound(min) && is_bound(max) => Ok(()),
            _ => Err(shape_error()),
        },
        FieldKind::ValueList { choices } => match value {
            ConditionValue::Choice(key) if choices.iter().any(|c| &c.key == key) => Ok(()),
            ConditionValue::Choice(key) => Err(ValidationReason::UnknownChoice {
                field: field.label.clone(),
                key: key.clone(),
            }),
            _ => Err(shape_error()),
        },
        FieldKind::Autocomplete { lookup } => match value {
            ConditionValue::Identifier(id) => lookup
                .resolve_label(id)
                .map(|_| ())
                .map_err(|_| ValidationReason::UnknownIdentifier {
                    field: field.label.clone(),
                    id: id.clone(),
                }),
            _ => Err(shape_error()),
        },
    }
}

/// Non-finite floats have no interchange form.
fn is_bound(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::String(_) => true,
        Value::Float(f) => f.is_finite(),
        Value::Boolean(_) | Value::Null => false,
    }
}
