//! Caller side of form persistence. Saving never silently replaces an
//! existing form: without `overwrite` a name collision is a conflict the
//! caller has to confirm.

use crate::{
    FormStore,
    error::{ConflictError, ServiceError},
    models::{SearchForm, VisibilityScope},
};
use model::registry::Registry;
use seek_syntax::FormData;
use tracing::{info, warn};

pub struct FormService<S> {
    store: S,
}

impl<S: FormStore> FormService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn save(
        &self,
        name: &str,
        owner: &str,
        public: bool,
        form: &FormData,
        overwrite: bool,
    ) -> Result<SearchForm, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::EmptyName);
        }
        check_key_parts(name, owner)?;

        let existing = self
            .store
            .find_by_name(name, owner, VisibilityScope::Owned)
            .await?;
        if existing.is_some() && !overwrite {
            warn!("Refusing to overwrite form '{}' without confirmation", name);
            return Err(ConflictError {
                name: name.to_string(),
            }
            .into());
        }

        let record = SearchForm::new(name, owner, public, form.to_json_string());
        let stored = self.store.upsert(record).await?;
        info!(
            "{} form '{}' for '{}'",
            if existing.is_some() { "Replaced" } else { "Saved" },
            name,
            owner
        );
        Ok(stored)
    }

    /// Loads the caller's form, or failing that a public one of that name.
    pub async fn load(
        &self,
        name: &str,
        owner: &str,
        registry: &Registry,
    ) -> Result<FormData, ServiceError> {
        check_key_parts(name, owner)?;
        let record = self
            .store
            .find_by_name(name, owner, VisibilityScope::Visible)
            .await?
            .ok_or_else(|| ServiceError::NotFound(name.to_string()))?;

        let form = FormData::from_json_str(&record.data, registry)?;
        info!("Loaded form '{}' owned by '{}'", name, record.owner);
        Ok(form)
    }

    pub async fn list(&self, owner: &str, include_private: bool) -> Result<Vec<String>, ServiceError> {
        Ok(self.store.list_visible(owner, include_private).await?)
    }

    pub async fn delete(&self, name: &str, owner: &str) -> Result<(), ServiceError> {
        check_key_parts(name, owner)?;
        if self.store.delete(name, owner).await? {
            info!("Deleted form '{}' of '{}'", name, owner);
            Ok(())
        } else {
            Err(ServiceError::NotFound(name.to_string()))
        }
    }
}

/// NUL separates owner from name in store keys.
fn check_key_parts(name: &str, owner: &str) -> Result<(), ServiceError> {
    if name.contains('\0') {
        return Err(ServiceError::NulCharacter("form name"));
    }
    if owner.contains('\0') {
        return Err(ServiceError::NulCharacter("owner"));
    }
    Ok(())
}
