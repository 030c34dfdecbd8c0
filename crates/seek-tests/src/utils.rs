use expression_engine::{Evaluator, execute};
use model::{records::row::RowData, registry::Registry};
use planner::compile;
use seek_syntax::{FormData, Sequence};

/// Titles of the rows `form` selects, in result order.
pub fn matching_titles(form: &FormData, registry: &Registry, rows: &[RowData]) -> Vec<String> {
    execute(form, registry, rows)
        .expect("form executes")
        .into_iter()
        .map(title_of)
        .collect()
}

pub fn title_of(row: &RowData) -> String {
    row.get_value("title").as_string().unwrap_or_default()
}

pub fn row_with_title<'r>(rows: &'r [RowData], title: &str) -> &'r RowData {
    rows.iter()
        .find(|row| title_of(row) == title)
        .unwrap_or_else(|| panic!("no fixture row titled '{title}'"))
}

/// Whether the compiled `sequence` definitely holds for `row`.
pub fn holds(sequence: &Sequence, registry: &Registry, row: &RowData) -> bool {
    compile(sequence, registry).expect("sequence compiles").matches(row)
}

pub fn assert_titles(actual: &[String], expected: &[&str]) {
    let actual = actual.iter().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(actual, expected, "unexpected result set");
}
