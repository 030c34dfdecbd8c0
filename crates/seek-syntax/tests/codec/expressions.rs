//! Expression round trips and rejection of malformed input

use crate::registry;
use model::{core::value::Value, fields::Operator};
use seek_syntax::{
    Condition, ConditionValue, JoinOp, Sequence, StructuralError, SyntaxError, Term, TermPath,
    ValidationReason, deserialize, serialize,
};
use serde_json::json;

fn sample() -> Sequence {
    Sequence::new(Condition::range(
        "Year",
        Operator::InRange,
        Value::String("1999".into()),
        Value::String("2000".into()),
    ))
    .with(JoinOp::Or, Condition::choice("Language", Operator::Equal, "english"))
    .with(
        JoinOp::And,
        Sequence::new(Condition::text("Title", Operator::NotStartsWith, "The"))
            .with(JoinOp::Or, Condition::identifier("Author", Operator::NotEqual, "8"))
            .with(
                JoinOp::And,
                Sequence::new(Condition::text("Title", Operator::Contains, "rust")),
            ),
    )
}

#[test]
fn test_round_trip_deeply_nested() {
    let seq = sample();
    let decoded = deserialize(&serialize(&seq), &registry()).unwrap();
    assert_eq!(decoded, seq);
}

#[test]
fn test_round_trip_through_text() {
    let text = serialize(&sample()).to_string();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(deserialize(&value, &registry()).unwrap(), sample());
}

#[test]
fn test_join_tokens_survive() {
    let seq = sample();
    let decoded = deserialize(&serialize(&seq), &registry()).unwrap();
    assert_eq!(
        decoded.joins().collect::<Vec<_>>(),
        vec![JoinOp::Or, JoinOp::And]
    );
    let group = decoded.term(2).and_then(Term::as_group).unwrap();
    assert_eq!(group.joins().collect::<Vec<_>>(), vec![JoinOp::Or, JoinOp::And]);
}

#[test]
fn test_autocomplete_value_forms_normalise() {
    let reg = registry();
    for raw in [json!("7"), json!(7), json!([7, "John Smith"]), json!(["7", "John Smith"])] {
        let value = json!([{"field": "Author", "operation": "eq", "value": raw}]);
        let seq = deserialize(&value, &reg).unwrap();
        assert_eq!(
            seq.head().as_condition().unwrap().value,
            ConditionValue::Identifier("7".into())
        );
    }
}

#[test]
fn test_autocomplete_rejects_labels() {
    let value = json!([{"field": "Author", "operation": "eq", "value": "John Smith"}]);
    let err = deserialize(&value, &registry()).unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::Validation(e) if matches!(e.reason, ValidationReason::UnknownIdentifier { .. })
    ));
}

#[test]
fn test_validation_error_carries_nested_path() {
    let value = json!([
        {"field": "Title", "operation": "contains", "value": "a"},
        "and",
        [
            {"field": "Title", "operation": "eq", "value": "b"},
            "or",
            {"field": "Language", "operation": "contains", "value": "english"}
        ]
    ]);

    match deserialize(&value, &registry()).unwrap_err() {
        SyntaxError::Validation(err) => {
            assert_eq!(err.path, TermPath::new(vec![1, 1]));
            assert_eq!(err.path.to_string(), "1.1");
            assert_eq!(
                err.reason,
                ValidationReason::OperatorNotAllowed {
                    field: "Language".into(),
                    operator: "contains".into()
                }
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_structural_error_in_nested_group() {
    let value = json!([
        {"field": "Title", "operation": "contains", "value": "a"},
        "and",
        [{"field": "Title", "operation": "eq", "value": "b"}, "or"]
    ]);

    match deserialize(&value, &registry()).unwrap_err() {
        SyntaxError::Structural(StructuralError::TrailingJoin { at }) => {
            assert_eq!(at, TermPath::new(vec![1]))
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_unknown_field_and_operator() {
    let reg = registry();

    let err = deserialize(
        &json!([{"field": "Pages", "operation": "eq", "value": "1"}]),
        &reg,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::Validation(e) if e.reason == ValidationReason::UnknownField("Pages".into())
    ));

    let err = deserialize(
        &json!([{"field": "Title", "operation": "like", "value": "1"}]),
        &reg,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::Validation(e) if e.reason == ValidationReason::UnknownOperator("like".into())
    ));
}

#[test]
fn test_range_needs_pair() {
    let err = deserialize(
        &json!([{"field": "Year", "operation": "in", "value": ["1999"]}]),
        &registry(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::Validation(e) if matches!(e.reason, ValidationReason::InvalidValue { .. })
    ));
}
