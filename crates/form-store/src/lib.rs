//! Named search form persistence: the store contract, two stores, and the
//! save/load protocol callers go through.

use crate::{
    error::StoreError,
    models::{SearchForm, VisibilityScope},
};
use async_trait::async_trait;

pub mod error;
pub mod memory;
pub mod models;
pub mod service;
pub mod sled_store;

pub use error::{ConflictError, ServiceError};
pub use memory::MemoryFormStore;
pub use service::FormService;
pub use sled_store::SledFormStore;

/// Forms are keyed by `(owner, name)`. Concurrent writes to the same key
/// are last-write-wins.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// `Owned` only finds the caller's own form. `Visible` falls back to a
    /// public form of that name owned by someone else.
    async fn find_by_name(
        &self,
        name: &str,
        owner: &str,
        scope: VisibilityScope,
    ) -> Result<Option<SearchForm>, StoreError>;

    /// Inserts or replaces the caller's form. A replaced form keeps its id
    /// and creation time. Returns the stored record.
    async fn upsert(&self, form: SearchForm) -> Result<SearchForm, StoreError>;

    /// Names of every public form plus, with `include_private`, the
    /// caller's private ones. Sorted and de-duplicated.
    async fn list_visible(&self, owner: &str, include_private: bool)
    -> Result<Vec<String>, StoreError>;

    /// Removes the caller's own form, returning whether one existed.
    async fn delete(&self, name: &str, owner: &str) -> Result<bool, StoreError>;
}
