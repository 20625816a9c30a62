//! In-process document store.
//!
//! Collections live in a map of insertion-ordered vectors behind a single
//! async `RwLock`. Clones share the same data. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::{Body, StoredDocument, strip_reserved};

#[derive(Clone, Debug, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<StoredDocument>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_all(&self, collection: &str) -> Vec<StoredDocument> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn find_by_id(&self, collection: &str, id: Uuid) -> Option<StoredDocument> {
        self.collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id).cloned())
    }

    pub async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Option<StoredDocument> {
        self.collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| {
                docs.iter()
                    .find(|doc| doc.body.get(field) == Some(value))
                    .cloned()
            })
    }

    pub async fn insert(&self, collection: &str, body: Body) -> StoredDocument {
        let now = Utc::now();
        let document = StoredDocument {
            id: Uuid::new_v4(),
            body: strip_reserved(body),
            created_at: now,
            updated_at: now,
        };

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());

        document
    }

    pub async fn update(&self, collection: &str, id: Uuid, patch: Body) -> Option<StoredDocument> {
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)?
            .iter_mut()
            .find(|doc| doc.id == id)?;

        document.body.extend(strip_reserved(patch));
        document.updated_at = Utc::now();
        Some(document.clone())
    }

    pub async fn delete(&self, collection: &str, id: Uuid) -> bool {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return false;
        };

        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        docs.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Body {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_preserves_order() {
        let store = MemoryDocumentStore::new();
        let first = store.insert("subjects", body(json!({"n": 1}))).await;
        let second = store.insert("subjects", body(json!({"n": 2}))).await;

        let all = store.find_all("subjects").await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryDocumentStore::new();
        store.insert("subjects", body(json!({"n": 1}))).await;

        assert!(store.find_all("notices").await.is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_only_supplied_fields() {
        let store = MemoryDocumentStore::new();
        let doc = store
            .insert("subjects", body(json!({"name": "Math", "code": "M1"})))
            .await;

        let updated = store
            .update("subjects", doc.id, body(json!({"name": "Algebra"})))
            .await
            .unwrap();

        assert_eq!(updated.body["name"], "Algebra");
        assert_eq!(updated.body["code"], "M1");
        assert!(updated.updated_at >= doc.updated_at);
        assert_eq!(updated.created_at, doc.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = MemoryDocumentStore::new();
        let result = store
            .update("subjects", Uuid::new_v4(), body(json!({"a": 1})))
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_body_cannot_override_id() {
        let store = MemoryDocumentStore::new();
        let doc = store
            .insert("subjects", body(json!({"_id": "forged", "name": "Math"})))
            .await;

        assert!(!doc.body.contains_key("_id"));
        assert_eq!(doc.to_json()["_id"], doc.id.to_string());
    }

    #[tokio::test]
    async fn test_find_one_and_delete() {
        let store = MemoryDocumentStore::new();
        let doc = store
            .insert("subjects", body(json!({"code": "MATH101"})))
            .await;

        let found = store
            .find_one("subjects", "code", &json!("MATH101"))
            .await
            .unwrap();
        assert_eq!(found.id, doc.id);

        assert!(store.delete("subjects", doc.id).await);
        assert!(!store.delete("subjects", doc.id).await);
        assert!(store.find_by_id("subjects", doc.id).await.is_none());
    }
}
