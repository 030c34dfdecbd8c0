//! Turns a validated sequence into a predicate tree.
//!
//! Joins are folded strictly left to right with no precedence between
//! `and` and `or`: `A or B and C` compiles to `(A or B) and C`. A group is
//! compiled on its own and enters the fold as a single operand.

use crate::{
    error::PlannerError,
    predicate::{Predicate, TextMode},
};
use model::{
    core::value::Value,
    fields::{FieldDefinition, FieldKind, Operator},
    registry::Registry,
};
use seek_syntax::{
    Condition, ConditionValue, JoinOp, Sequence, Term, TermPath, ValidationError,
    ValidationReason, semantic::validator::validate_condition,
};
use tracing::debug;

pub fn compile(sequence: &Sequence, registry: &Registry) -> Result<Predicate, PlannerError> {
    let predicate = compile_sequence(sequence, registry, &TermPath::root())?;
    debug!(
        "Compiled {} conditions into {}",
        predicate.leaf_count(),
        predicate
    );
    Ok(predicate)
}

fn compile_sequence(
    sequence: &Sequence,
    registry: &Registry,
    at: &TermPath,
) -> Result<Predicate, PlannerError> {
    let mut acc = compile_term(sequence.head(), registry, at.child(0))?;

    for (index, (join, term)) in sequence.tail().iter().enumerate() {
        let operand = compile_term(term, registry, at.child(index + 1))?;
        acc = match join {
            JoinOp::And => Predicate::and(acc, operand),
            JoinOp::Or => Predicate::or(acc, operand),
        };
    }

    Ok(acc)
}

fn compile_term(term: &Term, registry: &Registry, path: TermPath) -> Result<Predicate, PlannerError> {
    match term {
        Term::Condition(condition) => compile_condition(condition, registry, path),
        Term::Group(group) => compile_sequence(group, registry, &path),
    }
}

fn compile_condition(
    condition: &Condition,
    registry: &Registry,
    path: TermPath,
) -> Result<Predicate, PlannerError> {
    let field = validate_condition(condition, registry)
        .map_err(|reason| ValidationError::new(path.clone(), reason))?;

    let positive = match positive_predicate(field, condition) {
        Some(p) => p,
        None => {
            return Err(ValidationError::new(
                path,
                ValidationReason::InvalidValue {
                    field: field.label.clone(),
                    expected: ConditionValue::expected_for(field.field_type()),
                },
            )
            .into());
        }
    };

    if condition.operator.is_negated() {
        Ok(Predicate::not(positive))
    } else {
        Ok(positive)
    }
}

/// The predicate of the non-negated operator. `None` when the value shape
/// does not fit the field, which validation already rules out.
fn positive_predicate(field: &FieldDefinition, condition: &Condition) -> Option<Predicate> {
    let column = field.column.clone();

    match (&field.kind, &condition.value) {
        (FieldKind::String, ConditionValue::Text(text)) => Some(Predicate::Text {
            column,
            mode: text_mode(condition.operator)?,
            pattern: text.clone(),
        }),
        (FieldKind::Range, ConditionValue::Range(min, max)) => Some(Predicate::Range {
            column,
            min: min.clone(),
            max: max.clone(),
        }),
        (FieldKind::ValueList { .. }, ConditionValue::Choice(key)) => Some(Predicate::Equals {
            column,
            value: Value::String(key.clone()),
        }),
        (FieldKind::Autocomplete { .. }, ConditionValue::Identifier(id)) => {
            Some(Predicate::Equals {
                column,
                value: Value::String(id.clone()),
            })
        }
        _ => None,
    }
}

fn text_mode(operator: Operator) -> Option<TextMode> {
    match operator.positive() {
        Operator::Contains => Some(TextMode::Contains),
        Operator::Equal => Some(TextMode::Exact),
        Operator::StartsWith => Some(TextMode::Prefix),
        _ => None,
    }
}
