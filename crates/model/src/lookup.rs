//! The capability an autocomplete field uses to turn free text into
//! identifiers. Only identifiers are ever stored in a form or compiled;
//! labels exist for display.

use crate::errors::NotFoundError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub id: String,
    pub label: String,
}

impl LookupEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

pub trait Lookup: Send + Sync + fmt::Debug {
    /// Candidate entries for the text typed so far, in the lookup's own order.
    fn resolve(&self, query: &str) -> Vec<LookupEntry>;

    /// Display label for a previously resolved identifier.
    fn resolve_label(&self, id: &str) -> Result<String, NotFoundError>;
}

/// A lookup over a fixed list of entries, matched case-insensitively by
/// substring of the label.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
    name: String,
    entries: Vec<LookupEntry>,
}

impl StaticLookup {
    pub fn new(name: &str, entries: Vec<LookupEntry>) -> Self {
        Self {
            name: name.to_string(),
            entries,
        }
    }

    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }
}

impl Lookup for StaticLookup {
    fn resolve(&self, query: &str) -> Vec<LookupEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.label.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn resolve_label(&self, id: &str) -> Result<String, NotFoundError> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.label.clone())
            .ok_or_else(|| NotFoundError::LookupEntry {
                field: self.name.clone(),
                id: id.to_string(),
            })
    }
}
