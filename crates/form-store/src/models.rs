use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchForm {
    pub id: Uuid,
    pub name: String,
    pub owner: String,
    pub public: bool,
    /// JSON text of the form document.
    pub data: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SearchForm {
    pub fn new(name: &str, owner: &str, public: bool, data: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            owner: owner.to_string(),
            public,
            data,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_visible_to(&self, owner: &str) -> bool {
        self.public || self.owner == owner
    }

    /// Takes over identity and creation time of the record being replaced.
    pub(crate) fn replacing(mut self, existing: &SearchForm) -> Self {
        self.id = existing.id;
        self.created_at = existing.created_at;
        self.updated_at = Utc::now();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityScope {
    Owned,
    Visible,
}
