use crate::{
    FormStore,
    error::StoreError,
    models::{SearchForm, VisibilityScope},
};
use async_trait::async_trait;
use sled::transaction::{ConflictableTransactionError, TransactionError};
use std::{collections::BTreeSet, path::Path};
use tracing::debug;

const FORM_PREFIX: &str = "form:";

pub struct SledFormStore {
    db: sled::Db,
}

impl SledFormStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Owner and name are separated by NUL. `FormService` rejects either
    /// containing one, so distinct pairs never share a key.
    #[inline]
    fn form_key(owner: &str, name: &str) -> String {
        format!("{FORM_PREFIX}{owner}\u{0}{name}")
    }

    fn scan(&self) -> Result<Vec<SearchForm>, StoreError> {
        let mut forms = Vec::new();
        for item in self.db.scan_prefix(FORM_PREFIX) {
            let (_key, value) = item?;
            forms.push(bincode::deserialize::<SearchForm>(&value)?);
        }
        Ok(forms)
    }
}

#[async_trait]
impl FormStore for SledFormStore {
    async fn find_by_name(
        &self,
        name: &str,
        owner: &str,
        scope: VisibilityScope,
    ) -> Result<Option<SearchForm>, StoreError> {
        if let Some(bytes) = self.db.get(Self::form_key(owner, name))? {
            return Ok(Some(bincode::deserialize(&bytes)?));
        }

        match scope {
            VisibilityScope::Owned => Ok(None),
            VisibilityScope::Visible => Ok(self
                .scan()?
                .into_iter()
                .find(|f| f.name == name && f.public)),
        }
    }

    async fn upsert(&self, form: SearchForm) -> Result<SearchForm, StoreError> {
        let key = Self::form_key(&form.owner, &form.name);

        // Read-modify-write in one transaction so an overwrite keeps the id
        // and creation time of the record it replaces.
        let result = self
            .db
            .transaction::<_, _, bincode::Error>(|tx_db| {
                let stored = match tx_db.get(key.as_bytes())? {
                    Some(existing_bytes) => {
                        let existing: SearchForm = bincode::deserialize(&existing_bytes)
                            .map_err(ConflictableTransactionError::Abort)?;
                        form.clone().replacing(&existing)
                    }
                    None => form.clone(),
                };

                let bytes = bincode::serialize(&stored).map_err(ConflictableTransactionError::Abort)?;
                tx_db.insert(key.as_bytes(), bytes)?;
                Ok(stored)
            });

        let stored = match result {
            Ok(stored) => stored,
            Err(TransactionError::Abort(e)) => return Err(e.into()),
            Err(TransactionError::Storage(e)) => return Err(e.into()),
        };

        self.db.flush_async().await?;
        debug!("Stored form '{}' of '{}'", stored.name, stored.owner);
        Ok(stored)
    }

    async fn list_visible(
        &self,
        owner: &str,
        include_private: bool,
    ) -> Result<Vec<String>, StoreError> {
        let names: BTreeSet<String> = self
            .scan()?
            .into_iter()
            .filter(|f| f.public || (include_private && f.owner == owner))
            .map(|f| f.name)
            .collect();
        Ok(names.into_iter().collect())
    }

    async fn delete(&self, name: &str, owner: &str) -> Result<bool, StoreError> {
        let removed = self.db.remove(Self::form_key(owner, name))?.is_some();
        self.db.flush_async().await?;
        Ok(removed)
    }
}
