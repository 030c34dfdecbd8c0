#![allow(dead_code)]

use model::{
    records::row::RowData,
    registry::{Registry, RegistryConfig},
};
use serde_json::json;

pub mod persistence;
pub mod utils;

/// Book catalog shared by every scenario. Three report types, one of them
/// restricted.
pub const CATALOG: &str = r#"{
    "fields": [
        {"label": "Title", "column": "title", "type": "string"},
        {"label": "Year", "column": "year", "type": "range"},
        {"label": "Language", "column": "language", "type": "value-list",
         "choices": [{"key": "english", "label": "English"}, {"key": "polish", "label": "Polish"}]},
        {"label": "Author", "column": "author_id", "type": "autocomplete",
         "entries": [{"id": "7", "label": "Martin Fowler"}, {"id": "8", "label": "Andrew Hunt"}]},
        {"label": "Shelf", "column": "shelf", "type": "string", "public": false}
    ],
    "ordering": [
        {"label": "Title", "column": "title"},
        {"label": "Year", "column": "year"}
    ],
    "report_types": [
        {"label": "list"},
        {"label": "table"},
        {"label": "export", "restricted": true}
    ]
}"#;

pub fn registry() -> Registry {
    let config = RegistryConfig::from_json_str(CATALOG).expect("catalog parses");
    Registry::from_config(&config).expect("catalog is consistent")
}

pub fn books() -> Vec<RowData> {
    [
        json!({"title": "Refactoring", "year": 1999, "language": "english", "author_id": "7"}),
        json!({"title": "The Pragmatic Programmer", "year": 1999, "language": "english", "author_id": "8"}),
        json!({"title": "Extreme Programming Explained", "year": 2000, "language": "english", "author_id": "7"}),
        json!({"title": "Effective Java", "year": 2001, "language": "english", "author_id": "9"}),
        json!({"title": "Pan Tadeusz", "year": 1834, "language": "polish", "author_id": null}),
        json!({"title": "Solaris", "year": 1961, "language": "polish", "author_id": "12"}),
        json!({"title": "Untitled draft", "year": null, "language": "english"}),
    ]
    .iter()
    .map(|book| RowData::from_json("book", book.as_object().expect("object")))
    .collect()
}
