use crate::{
    FormStore,
    error::StoreError,
    models::{SearchForm, VisibilityScope},
};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;

type FormKey = (String, String);

/// Process-local store keyed by `(owner, name)`.
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    forms: RwLock<BTreeMap<FormKey, SearchForm>>,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(owner: &str, name: &str) -> FormKey {
        (owner.to_string(), name.to_string())
    }
}

#[async_trait]
impl FormStore for MemoryFormStore {
    async fn find_by_name(
        &self,
        name: &str,
        owner: &str,
        scope: VisibilityScope,
    ) -> Result<Option<SearchForm>, StoreError> {
        let forms = self.forms.read().await;
        if let Some(own) = forms.get(&Self::key(owner, name)) {
            return Ok(Some(own.clone()));
        }

        Ok(match scope {
            VisibilityScope::Owned => None,
            VisibilityScope::Visible => forms
                .values()
                .find(|f| f.name == name && f.public)
                .cloned(),
        })
    }

    async fn upsert(&self, form: SearchForm) -> Result<SearchForm, StoreError> {
        let mut forms = self.forms.write().await;
        let key = Self::key(&form.owner, &form.name);

        let stored = match forms.get(&key) {
            Some(existing) => form.replacing(existing),
            None => form,
        };
        forms.insert(key, stored.clone());
        Ok(stored)
    }

    async fn list_visible(
        &self,
        owner: &str,
        include_private: bool,
    ) -> Result<Vec<String>, StoreError> {
        let forms = self.forms.read().await;
        let names: BTreeSet<&str> = forms
            .values()
            .filter(|f| f.public || (include_private && f.owner == owner))
            .map(|f| f.name.as_str())
            .collect();
        Ok(names.into_iter().map(String::from).collect())
    }

    async fn delete(&self, name: &str, owner: &str) -> Result<bool, StoreError> {
        let mut forms = self.forms.write().await;
        Ok(forms.remove(&Self::key(owner, name)).is_some())
    }
}
