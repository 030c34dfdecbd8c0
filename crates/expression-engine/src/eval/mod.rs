//! Three-valued evaluation: `Some(true)`, `Some(false)`, or `None` when a
//! compared attribute is missing or NULL. Only `Some(true)` selects a row.

use model::{core::value::Value, records::row::RowData};
use planner::Predicate;
use std::cmp::Ordering;

pub mod logic;
pub mod text;

pub trait Evaluator {
    fn evaluate(&self, row: &RowData) -> Option<bool>;

    fn matches(&self, row: &RowData) -> bool {
        self.evaluate(row) == Some(true)
    }
}

impl Evaluator for Predicate {
    fn evaluate(&self, row: &RowData) -> Option<bool> {
        match self {
            Predicate::Text {
                column,
                mode,
                pattern,
            } => {
                let value = row.get_value(column);
                text::matches(&value, *mode, pattern)
            }

            Predicate::Range { column, min, max } => {
                let value = row.get_value(column);
                let above = value.compare_loose(min)? != Ordering::Less;
                let below = value.compare_loose(max)? != Ordering::Greater;
                Some(above && below)
            }

            Predicate::Equals { column, value } => {
                let actual = row.get_value(column);
                actual
                    .compare_loose(value)
                    .map(|ordering| ordering == Ordering::Equal)
            }

            Predicate::Not(inner) => inner.evaluate(row).map(|b| !b),

            Predicate::And(l, r) => logic::and(l.evaluate(row), r.evaluate(row)),

            Predicate::Or(l, r) => logic::or(l.evaluate(row), r.evaluate(row)),
        }
    }
}

/// Null-safe accessor used by sorting as well.
pub(crate) fn attribute(row: &RowData, column: &str) -> Option<Value> {
    match row.get_value(column) {
        Value::Null => None,
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner::TextMode;
    use serde_json::json;

    fn row(value: serde_json::Value) -> RowData {
        RowData::from_json("book", value.as_object().unwrap())
    }

    fn year_range(min: Value, max: Value) -> Predicate {
        Predicate::Range {
            column: "year".into(),
            min,
            max,
        }
    }

    #[test]
    fn test_range_is_inclusive_and_coerces_text_bounds() {
        let p = year_range(Value::String("1999".into()), Value::String("2000".into()));
        assert!(p.matches(&row(json!({"year": 1999}))));
        assert!(p.matches(&row(json!({"year": 2000}))));
        assert!(!p.matches(&row(json!({"year": 2001}))));
        assert!(!p.matches(&row(json!({"year": 1998}))));

        let outside = Predicate::not(p);
        assert!(outside.matches(&row(json!({"year": 1998}))));
        assert!(!outside.matches(&row(json!({"year": 1999}))));
    }

    #[test]
    fn test_missing_attribute_is_unknown_on_both_sides() {
        let p = year_range(Value::Int(1999), Value::Int(2000));
        let blank = row(json!({"year": null}));
        assert_eq!(p.evaluate(&blank), None);
        assert!(!p.matches(&blank));
        assert!(!Predicate::not(p).matches(&blank));
    }

    #[test]
    fn test_equals_and_text() {
        let book = row(json!({"title": "The Rust Book", "lang": "english"}));

        let lang = Predicate::Equals {
            column: "lang".into(),
            value: Value::String("english".into()),
        };
        assert!(lang.matches(&book));

        let title = Predicate::Text {
            column: "title".into(),
            mode: TextMode::Contains,
            pattern: "rust".into(),
        };
        assert!(title.matches(&book));
        assert!(Predicate::and(lang, title).matches(&book));
    }
}
