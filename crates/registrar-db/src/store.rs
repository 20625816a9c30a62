//! Backend-agnostic document store handle.

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use registrar_config::DatabaseConfig;

use crate::document::{Body, StoredDocument};
use crate::error::{StoreError, StoreResult};
use crate::memory::MemoryDocumentStore;
use crate::postgres::PgDocumentStore;

/// The process-wide document store.
///
/// Cheap to clone; clones share the underlying pool or memory map. Every
/// operation addresses exactly one collection.
#[derive(Clone, Debug)]
pub enum DocumentStore {
    Postgres(PgDocumentStore),
    Memory(MemoryDocumentStore),
    /// Stands in for a store that could not be configured. Every operation
    /// fails with [`StoreError::Unavailable`] carrying the original reason.
    Unavailable(String),
}

impl DocumentStore {
    /// Creates the store selected by `config.url` without touching the network.
    pub fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        if config.is_memory() {
            info!("Using in-memory document store");
            return Ok(Self::memory());
        }

        Ok(Self::Postgres(PgDocumentStore::connect_lazy(config)?))
    }

    pub fn memory() -> Self {
        Self::Memory(MemoryDocumentStore::new())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
            Self::Unavailable(_) => "unavailable",
        }
    }

    fn unavailable_error(reason: &str) -> StoreError {
        StoreError::Unavailable(reason.to_string())
    }

    /// Applies pending schema migrations. A no-op for the memory store.
    ///
    /// Postgres operations also apply them on first use, so a failure here
    /// is retried by the next request.
    pub async fn migrate(&self) -> StoreResult<()> {
        match self {
            Self::Postgres(store) => store.migrate().await,
            Self::Memory(_) => Ok(()),
            Self::Unavailable(reason) => Err(Self::unavailable_error(reason)),
        }
    }

    /// All documents of a collection in insertion order.
    pub async fn find_all(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        match self {
            Self::Postgres(store) => store.find_all(collection).await,
            Self::Memory(store) => Ok(store.find_all(collection).await),
            Self::Unavailable(reason) => Err(Self::unavailable_error(reason)),
        }
    }

    pub async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<StoredDocument>> {
        match self {
            Self::Postgres(store) => store.find_by_id(collection, id).await,
            Self::Memory(store) => Ok(store.find_by_id(collection, id).await),
            Self::Unavailable(reason) => Err(Self::unavailable_error(reason)),
        }
    }

    /// First document (in insertion order) whose top-level `field` equals `value`.
    pub async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Option<StoredDocument>> {
        match self {
            Self::Postgres(store) => store.find_one(collection, field, value).await,
            Self::Memory(store) => Ok(store.find_one(collection, field, value).await),
            Self::Unavailable(reason) => Err(Self::unavailable_error(reason)),
        }
    }

    pub async fn insert(&self, collection: &str, body: Body) -> StoreResult<StoredDocument> {
        match self {
            Self::Postgres(store) => store.insert(collection, body).await,
            Self::Memory(store) => Ok(store.insert(collection, body).await),
            Self::Unavailable(reason) => Err(Self::unavailable_error(reason)),
        }
    }

    /// Merges `patch` into the document's top-level keys. `None` if no such document.
    pub async fn update(
        &self,
        collection: &str,
        id: Uuid,
        patch: Body,
    ) -> StoreResult<Option<StoredDocument>> {
        match self {
            Self::Postgres(store) => store.update(collection, id, patch).await,
            Self::Memory(store) => Ok(store.update(collection, id, patch).await),
            Self::Unavailable(reason) => Err(Self::unavailable_error(reason)),
        }
    }

    /// Removes the document. `false` if no such document.
    pub async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<bool> {
        match self {
            Self::Postgres(store) => store.delete(collection, id).await,
            Self::Memory(store) => Ok(store.delete(collection, id).await),
            Self::Unavailable(reason) => Err(Self::unavailable_error(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_memory_url() {
        let store = DocumentStore::connect(&DatabaseConfig::memory()).unwrap();
        assert_eq!(store.backend(), "memory");
    }

    #[tokio::test]
    async fn test_connect_postgres_is_lazy() {
        let config = DatabaseConfig {
            url: "postgres://nobody@127.0.0.1:1/nowhere".to_string(),
            ..DatabaseConfig::default()
        };

        let store = DocumentStore::connect(&config).unwrap();
        assert_eq!(store.backend(), "postgres");
    }

    #[test]
    fn test_connect_rejects_garbage_url() {
        let config = DatabaseConfig {
            url: "not a url".to_string(),
            ..DatabaseConfig::default()
        };
        assert!(DocumentStore::connect(&config).is_err());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_operation() {
        let store = DocumentStore::unavailable("Invalid database URL: not a url");
        let id = Uuid::new_v4();
        let value = Value::String("x".to_string());

        assert_eq!(store.backend(), "unavailable");
        assert!(matches!(
            store.migrate().await,
            Err(StoreError::Unavailable(reason)) if reason.contains("not a url")
        ));
        assert!(store.find_all("subjects").await.is_err());
        assert!(store.find_by_id("subjects", id).await.is_err());
        assert!(store.find_one("subjects", "code", &value).await.is_err());
        assert!(store.insert("subjects", Body::new()).await.is_err());
        assert!(store.update("subjects", id, Body::new()).await.is_err());
        assert!(store.delete("subjects", id).await.is_err());
    }
}
