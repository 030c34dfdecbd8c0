use crate::eval::attribute;
use model::{core::value::Value, ordering::Direction, records::row::RowData};
use planner::SortKey;
use std::cmp::Ordering;

/// Stable multi-key sort. NULL and missing values sort last whatever the
/// direction. Mixed column types follow the order of [`compare_values`].
pub fn sort_rows(rows: &mut [&RowData], keys: &[SortKey]) {
    if keys.is_empty() {
        return;
    }
    rows.sort_by(|a, b| compare_rows(a, b, keys));
}

fn compare_rows(a: &RowData, b: &RowData, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ordering = match (attribute(a, &key.column), attribute(b, &key.column)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(l), Some(r)) => {
                let ordering = compare_values(&l, &r);
                match key.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Total order over non-null values: booleans, then numbers (including
/// numeric strings), then remaining strings lexically. Numbers compare by
/// magnitude, ties broken by representation.
fn compare_values(l: &Value, r: &Value) -> Ordering {
    let (lk, rk) = (sort_class(l), sort_class(r));
    lk.rank().cmp(&rk.rank()).then_with(|| match (lk, rk) {
        (SortClass::Boolean(a), SortClass::Boolean(b)) => a.cmp(&b),
        (SortClass::Number(a), SortClass::Number(b)) => a
            .total_cmp(&b)
            .then_with(|| representation(l).cmp(&representation(r)))
            .then_with(|| match (l, r) {
                (Value::Int(a), Value::Int(b)) => a.cmp(b),
                (Value::String(a), Value::String(b)) => a.cmp(b),
                _ => Ordering::Equal,
            }),
        (SortClass::Text(a), SortClass::Text(b)) => a.cmp(b),
        _ => Ordering::Equal,
    })
}

enum SortClass<'a> {
    Boolean(bool),
    Number(f64),
    Text(&'a str),
}

impl SortClass<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortClass::Boolean(_) => 0,
            SortClass::Number(_) => 1,
            SortClass::Text(_) => 2,
        }
    }
}

fn sort_class(value: &Value) -> SortClass<'_> {
    match value {
        Value::Boolean(b) => SortClass::Boolean(*b),
        Value::String(s) => match value.as_f64() {
            Some(n) => SortClass::Number(n),
            None => SortClass::Text(s),
        },
        // Null never reaches here; attribute() maps it to a missing value.
        other => SortClass::Number(other.as_f64().unwrap_or(f64::NAN)),
    }
}

fn representation(value: &Value) -> u8 {
    match value {
        Value::Int(_) => 0,
        Value::Float(_) => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<RowData> {
        [
            json!({"id": 1, "year": 2001, "title": "b"}),
            json!({"id": 2, "year": null, "title": "a"}),
            json!({"id": 3, "year": 1999, "title": "c"}),
            json!({"id": 4, "year": 2001, "title": "a"}),
        ]
        .iter()
        .map(|v| RowData::from_json("book", v.as_object().unwrap()))
        .collect()
    }

    fn ids(rows: &[&RowData]) -> Vec<String> {
        rows.iter().map(|r| r.get_value("id").to_string()).collect()
    }

    fn key(column: &str, direction: Direction) -> SortKey {
        SortKey {
            column: column.into(),
            direction,
        }
    }

    #[test]
    fn test_nulls_last_in_both_directions() {
        let data = rows();
        let mut view: Vec<&RowData> = data.iter().collect();

        sort_rows(&mut view, &[key("year", Direction::Ascending)]);
        assert_eq!(ids(&view), vec!["3", "1", "4", "2"]);

        sort_rows(&mut view, &[key("year", Direction::Descending)]);
        assert_eq!(ids(&view), vec!["1", "4", "3", "2"]);
    }

    #[test]
    fn test_secondary_key() {
        let data = rows();
        let mut view: Vec<&RowData> = data.iter().collect();
        sort_rows(
            &mut view,
            &[key("year", Direction::Descending), key("title", Direction::Ascending)],
        );
        assert_eq!(ids(&view), vec!["4", "1", "3", "2"]);
    }

    #[test]
    fn test_mixed_types_sort_consistently() {
        let data: Vec<RowData> = [
            json!({"id": 1, "year": 2}),
            json!({"id": 2, "year": "x"}),
            json!({"id": 3, "year": 1}),
            json!({"id": 4, "year": true}),
            json!({"id": 5, "year": "1.5"}),
            json!({"id": 6, "year": 2.0}),
            json!({"id": 7, "year": "a"}),
        ]
        .iter()
        .map(|v| RowData::from_json("book", v.as_object().unwrap()))
        .collect();

        let mut view: Vec<&RowData> = data.iter().collect();
        sort_rows(&mut view, &[key("year", Direction::Ascending)]);
        assert_eq!(ids(&view), vec!["4", "3", "5", "1", "6", "7", "2"]);

        view.reverse();
        sort_rows(&mut view, &[key("year", Direction::Ascending)]);
        assert_eq!(ids(&view), vec!["4", "3", "5", "1", "6", "7", "2"]);

        sort_rows(&mut view, &[key("year", Direction::Descending)]);
        assert_eq!(ids(&view), vec!["2", "7", "6", "1", "5", "3", "4"]);
    }
}
