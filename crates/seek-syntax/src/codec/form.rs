//! The whole form document as it is persisted:
//!
//! ```text
//! {"form_data": [...], "_ms_ordering_0": "Year", "_ms_ordering_0_dir": "1",
//!  "_ms_report_type": "list"}
//! ```

use crate::{
    ast::sequence::Sequence,
    codec::{
        expression::{deserialize, serialize},
        ordering::{ORDERING_PREFIX, REPORT_TYPE_PARAM, decode_ordering, encode_ordering},
    },
    errors::{StructuralError, SyntaxError},
};
use model::{errors::NotFoundError, ordering::OrderingSpec, registry::Registry};
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;
use tracing::debug;

pub const FORM_DATA_KEY: &str = "form_data";

#[derive(Debug, Clone, PartialEq)]
pub struct FormData {
    pub sequence: Sequence,
    pub ordering: OrderingSpec,
    /// Label of the selected report type.
    pub report_type: Option<String>,
}

impl FormData {
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            ordering: OrderingSpec::default(),
            report_type: None,
        }
    }

    pub fn with_ordering(mut self, ordering: OrderingSpec) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_report_type(mut self, label: &str) -> Self {
        self.report_type = Some(label.to_string());
        self
    }

    pub fn encode(&self) -> Json {
        let mut doc = Map::new();
        doc.insert(FORM_DATA_KEY.to_string(), serialize(&self.sequence));
        for (key, value) in encode_ordering(&self.ordering) {
            doc.insert(key, Json::String(value));
        }
        if let Some(label) = &self.report_type {
            doc.insert(REPORT_TYPE_PARAM.to_string(), Json::String(label.clone()));
        }
        Json::Object(doc)
    }

    /// Decodes a form document. Report type visibility is not checked here;
    /// that is the gate's decision at selection time.
    pub fn decode(value: &Json, registry: &Registry) -> Result<Self, SyntaxError> {
        let doc = value.as_object().ok_or(StructuralError::NotAnObject)?;

        let expression = doc
            .get(FORM_DATA_KEY)
            .ok_or(StructuralError::MissingKey(FORM_DATA_KEY))?;
        let sequence = deserialize(expression, registry)?;

        let mut params = BTreeMap::new();
        for (key, value) in doc.iter().filter(|(k, _)| k.starts_with(ORDERING_PREFIX)) {
            params.insert(key.clone(), param_text(key, value)?);
        }
        let ordering = decode_ordering(&params, registry)?;

        let report_type = match doc.get(REPORT_TYPE_PARAM) {
            None | Some(Json::Null) => None,
            Some(value) => {
                let label = param_text(REPORT_TYPE_PARAM, value)?;
                if label.is_empty() {
                    None
                } else if registry.report_types().iter().any(|r| r.label == label) {
                    Some(label)
                } else {
                    return Err(NotFoundError::ReportType(label).into());
                }
            }
        };

        debug!(
            "Decoded form with {} top-level terms, report type {:?}",
            sequence.len(),
            report_type
        );

        Ok(Self {
            sequence,
            ordering,
            report_type,
        })
    }

    pub fn to_json_string(&self) -> String {
        self.encode().to_string()
    }

    pub fn from_json_str(text: &str, registry: &Registry) -> Result<Self, SyntaxError> {
        let value: Json = serde_json::from_str(text)?;
        Self::decode(&value, registry)
    }
}

/// Parameters are strings, though numbers are accepted for slot indices
/// submitted by older clients.
fn param_text(key: &str, value: &Json) -> Result<String, StructuralError> {
    match value {
        Json::String(s) => Ok(s.clone()),
        Json::Number(n) => Ok(n.to_string()),
        _ => Err(StructuralError::InvalidParameter {
            key: key.to_string(),
            reason: "expected a string".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{condition::Condition, join::JoinOp};
    use model::{
        fields::{FieldDefinition, Operator},
        ordering::{Direction, OrderableField},
        report::ReportType,
    };
    use serde_json::json;

    fn registry() -> Registry {
        Registry::builder()
            .register(FieldDefinition::string("Title", "title"))
            .orderable(OrderableField::new("Title", "title"))
            .report_type(ReportType::new("list"))
            .report_type(ReportType::restricted("export"))
            .build()
            .unwrap()
    }

    fn form() -> FormData {
        let mut ordering = OrderingSpec::default();
        ordering.set(0, Some("Title"), Direction::Descending);
        FormData::new(
            Sequence::new(Condition::text("Title", Operator::Contains, "a"))
                .with(JoinOp::Or, Condition::text("Title", Operator::StartsWith, "b")),
        )
        .with_ordering(ordering)
        .with_report_type("export")
    }

    #[test]
    fn test_encode_layout() {
        let doc = form().encode();
        assert_eq!(doc["_ms_ordering_0"], json!("Title"));
        assert_eq!(doc["_ms_ordering_0_dir"], json!("1"));
        assert_eq!(doc["_ms_ordering_1_dir"], json!("0"));
        assert_eq!(doc["_ms_report_type"], json!("export"));
        assert_eq!(doc["form_data"][1], json!("or"));
    }

    #[test]
    fn test_decode_from_text() {
        let original = form();
        let decoded = FormData::from_json_str(&original.to_json_string(), &registry()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_without_ordering_or_report_type() {
        let doc = json!({"form_data": [{"field": "Title", "operation": "eq", "value": "x"}]});
        let form = FormData::decode(&doc, &registry()).unwrap();
        assert!(form.ordering.is_unused());
        assert_eq!(form.ordering.slots().len(), 3);
        assert_eq!(form.report_type, None);
    }

    #[test]
    fn test_decode_errors() {
        let reg = registry();
        assert!(matches!(
            FormData::decode(&json!([]), &reg),
            Err(SyntaxError::Structural(StructuralError::NotAnObject))
        ));
        assert!(matches!(
            FormData::decode(&json!({"_ms_report_type": "list"}), &reg),
            Err(SyntaxError::Structural(StructuralError::MissingKey("form_data")))
        ));

        let doc = json!({
            "form_data": [{"field": "Title", "operation": "eq", "value": "x"}],
            "_ms_report_type": "chart"
        });
        assert!(matches!(
            FormData::decode(&doc, &reg),
            Err(SyntaxError::NotFound(NotFoundError::ReportType(_)))
        ));

        assert!(matches!(
            FormData::from_json_str("{not json", &reg),
            Err(SyntaxError::Json(_))
        ));
    }
}
