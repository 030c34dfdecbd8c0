//! Interchange codec tests against a catalog-built registry

mod documents;
mod expressions;

use model::registry::{Registry, RegistryConfig};

const CATALOG: &str = r#"{
    "fields": [
        {"label": "Title", "column": "title", "type": "string"},
        {"label": "Year", "column": "year", "type": "range"},
        {"label": "Language", "column": "language", "type": "value-list",
         "choices": [{"key": "english", "label": "English"}, {"key": "polish", "label": "Polish"}]},
        {"label": "Author", "column": "author_id", "type": "autocomplete",
         "entries": [{"id": "7", "label": "John Smith"}, {"id": "8", "label": "Jane Doe"}]}
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
    let config = RegistryConfig::from_json_str(CATALOG).unwrap();
    Registry::from_config(&config).unwrap()
}
