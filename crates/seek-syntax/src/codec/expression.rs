use crate::{
    ast::{
        condition::{Condition, ConditionValue},
        join::JoinOp,
        path::TermPath,
        sequence::Sequence,
        term::Term,
    },
    codec::{FIELD_KEY, OPERATION_KEY, VALUE_KEY},
    errors::{StructuralError, SyntaxError, ValidationError, ValidationReason},
    semantic::validator::validate_condition,
};
use model::{
    core::value::Value,
    fields::{FieldDefinition, FieldKind, Operator},
    registry::Registry,
};
use serde_json::{Map, Value as Json, json};

pub fn serialize(sequence: &Sequence) -> Json {
    let mut items = Vec::with_capacity(sequence.len() * 2 - 1);
    items.push(serialize_term(sequence.head()));
    for (join, term) in sequence.tail() {
        items.push(Json::String(join.token().to_string()));
        items.push(serialize_term(term));
    }
    Json::Array(items)
}

fn serialize_term(term: &Term) -> Json {
    match term {
        Term::Condition(condition) => json!({
            FIELD_KEY: condition.field,
            OPERATION_KEY: condition.operator.token(),
            VALUE_KEY: serialize_value(&condition.value),
        }),
        Term::Group(sequence) => serialize(sequence),
    }
}

fn serialize_value(value: &ConditionValue) -> Json {
    match value {
        ConditionValue::Text(s) | ConditionValue::Choice(s) | ConditionValue::Identifier(s) => {
            Json::String(s.clone())
        }
        ConditionValue::Range(min, max) => Json::Array(vec![min.to_json(), max.to_json()]),
    }
}

/// Decodes and validates an interchange value. Nothing is returned unless
/// the whole expression is well formed and valid against `registry`.
pub fn deserialize(value: &Json, registry: &Registry) -> Result<Sequence, SyntaxError> {
    decode_sequence(value, registry, &TermPath::root())
}

fn decode_sequence(
    value: &Json,
    registry: &Registry,
    at: &TermPath,
) -> Result<Sequence, SyntaxError> {
    let items = value
        .as_array()
        .ok_or_else(|| StructuralError::NotAnArray { at: at.clone() })?;

    if items.is_empty() {
        return Err(StructuralError::Empty { at: at.clone() }.into());
    }

    let mut terms = Vec::with_capacity(items.len() / 2 + 1);
    let mut joins = Vec::with_capacity(items.len() / 2);

    for (index, item) in items.iter().enumerate() {
        if index % 2 == 0 {
            let path = at.child(index / 2);
            let term = match item {
                Json::Object(record) => Term::Condition(decode_condition(record, registry, &path)?),
                Json::Array(_) => Term::Group(decode_sequence(item, registry, &path)?),
                _ => {
                    return Err(StructuralError::ExpectedTerm {
                        at: at.clone(),
                        index,
                    }
                    .into());
                }
            };
            terms.push(term);
        } else {
            let join = item
                .as_str()
                .and_then(JoinOp::from_token)
                .ok_or_else(|| StructuralError::ExpectedJoin {
                    at: at.clone(),
                    index,
                })?;
            joins.push(join);
        }
    }

    if items.len() % 2 == 0 {
        return Err(StructuralError::TrailingJoin { at: at.clone() }.into());
    }

    Ok(Sequence::from_parts(terms, joins)?)
}

fn decode_condition(
    record: &Map<String, Json>,
    registry: &Registry,
    path: &TermPath,
) -> Result<Condition, ValidationError> {
    let fail = |reason| ValidationError::new(path.clone(), reason);

    let label = record
        .get(FIELD_KEY)
        .and_then(Json::as_str)
        .ok_or_else(|| fail(ValidationReason::MissingKey(FIELD_KEY)))?;
    let field = registry
        .by_label(label)
        .map_err(|_| fail(ValidationReason::UnknownField(label.to_string())))?;

    let token = record
        .get(OPERATION_KEY)
        .and_then(Json::as_str)
        .ok_or_else(|| fail(ValidationReason::MissingKey(OPERATION_KEY)))?;
    let operator = token
        .parse::<Operator>()
        .map_err(|_| fail(ValidationReason::UnknownOperator(token.to_string())))?;

    let raw = record
        .get(VALUE_KEY)
        .ok_or_else(|| fail(ValidationReason::MissingKey(VALUE_KEY)))?;
    let value = decode_value(field, raw).ok_or_else(|| {
        fail(ValidationReason::InvalidValue {
            field: field.label.clone(),
            expected: ConditionValue::expected_for(field.field_type()),
        })
    })?;

    let condition = Condition::new(label, operator, value);
    validate_condition(&condition, registry).map_err(fail)?;
    Ok(condition)
}

/// Reads a raw value in the shape the field's type expects.
fn decode_value(field: &FieldDefinition, raw: &Json) -> Option<ConditionValue> {
    match &field.kind {
        FieldKind::String => scalar_text(raw).map(ConditionValue::Text),
        FieldKind::Range => match raw.as_array().map(Vec::as_slice) {
            Some([min, max]) => Some(ConditionValue::Range(range_bound(min)?, range_bound(max)?)),
            _ => None,
        },
        FieldKind::ValueList { .. } => raw.as_str().map(|s| ConditionValue::Choice(s.to_string())),
        FieldKind::Autocomplete { .. } => match raw {
            // An `[id, label]` pair as produced by autocomplete widgets.
            Json::Array(pair) if pair.len() == 2 => identifier(&pair[0]),
            other => identifier(other),
        }
        .map(ConditionValue::Identifier),
    }
}

fn scalar_text(raw: &Json) -> Option<String> {
    match raw {
        Json::String(s) => Some(s.clone()),
        Json::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn identifier(raw: &Json) -> Option<String> {
    match raw {
        Json::String(s) => Some(s.clone()),
        Json::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

fn range_bound(raw: &Json) -> Option<Value> {
    match raw {
        Json::String(_) | Json::Number(_) => Some(Value::from_json(raw)),
        _ => None,
    }
}
