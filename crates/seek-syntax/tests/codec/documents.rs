//! Whole form documents: expression, ordering slots and report type

use crate::registry;
use model::{
    errors::NotFoundError,
    fields::Operator,
    ordering::{Direction, OrderingSpec},
};
use seek_syntax::{Condition, FormData, JoinOp, Sequence, StructuralError, SyntaxError};
use serde_json::json;

#[test]
fn test_document_round_trip() {
    let mut ordering = OrderingSpec::default();
    ordering.set(0, Some("Year"), Direction::Descending);
    ordering.set(1, None, Direction::Descending);
    ordering.set(2, Some("Title"), Direction::Ascending);

    let form = FormData::new(
        Sequence::new(Condition::text("Title", Operator::Contains, "rust"))
            .with(JoinOp::Or, Condition::choice("Language", Operator::NotEqual, "polish")),
    )
    .with_ordering(ordering)
    .with_report_type("table");

    let decoded = FormData::from_json_str(&form.to_json_string(), &registry()).unwrap();
    assert_eq!(decoded, form);
    assert_eq!(decoded.ordering.slot(1).unwrap().direction, Direction::Descending);
}

#[test]
fn test_decode_legacy_document() {
    let doc = json!({
        "form_data": [
            {"field": "Year", "operation": "in", "value": ["1999", "2000"]},
            "or",
            {"field": "Language", "operation": "eq", "value": "english"}
        ],
        "_ms_ordering_0": "Title",
        "_ms_ordering_0_dir": "",
        "_ms_ordering_1": "",
        "_ms_report_type": "list"
    });

    let form = FormData::decode(&doc, &registry()).unwrap();
    assert_eq!(form.sequence.len(), 2);
    assert_eq!(form.ordering.slot(0).unwrap().field.as_deref(), Some("Title"));
    assert_eq!(form.ordering.slot(0).unwrap().direction, Direction::Ascending);
    assert_eq!(form.report_type.as_deref(), Some("list"));
}

#[test]
fn test_unknown_orderable_field() {
    let doc = json!({
        "form_data": [{"field": "Title", "operation": "eq", "value": "x"}],
        "_ms_ordering_0": "Language"
    });
    assert!(matches!(
        FormData::decode(&doc, &registry()),
        Err(SyntaxError::NotFound(NotFoundError::OrderableField(label))) if label == "Language"
    ));
}

#[test]
fn test_restricted_report_type_still_decodes() {
    let doc = json!({
        "form_data": [{"field": "Title", "operation": "eq", "value": "x"}],
        "_ms_report_type": "export"
    });
    let form = FormData::decode(&doc, &registry()).unwrap();
    assert_eq!(form.report_type.as_deref(), Some("export"));
}

#[test]
fn test_malformed_ordering_parameters() {
    let oversized = format!("_ms_ordering_{}", usize::MAX);
    for (key, value) in [
        ("_ms_ordering_first", "Title"),
        ("_ms_ordering_0_dir", "down"),
        ("_ms_ordering_-1", "Title"),
        (oversized.as_str(), "Title"),
        ("_ms_ordering_4000000000_dir", "1"),
    ] {
        let mut doc = json!({
            "form_data": [{"field": "Title", "operation": "eq", "value": "x"}]
        });
        doc[key] = json!(value);

        assert!(
            matches!(
                FormData::decode(&doc, &registry()),
                Err(SyntaxError::Structural(StructuralError::InvalidParameter { key: rejected, .. }))
                    if rejected == key
            ),
            "{key} was accepted"
        );
    }
}
