//! PostgreSQL-backed document store.
//!
//! Documents of every collection share the `documents` table (see
//! `migrations/`). Bodies are JSONB; a partial update is the JSONB
//! concatenation `body || patch`, which replaces exactly the supplied keys.
//!
//! Migrations run before the first query on a store and are retried on the
//! next call until one attempt succeeds.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tokio::sync::OnceCell;
use tracing::{debug, info};
use uuid::Uuid;

use registrar_config::DatabaseConfig;

use crate::document::{Body, StoredDocument, strip_reserved};
use crate::error::{StoreError, StoreResult};

const COLUMNS: &str = "id, body, created_at, updated_at";

#[derive(FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Body>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for StoredDocument {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            body: row.body.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgDocumentStore {
    pool: PgPool,
    schema: Arc<OnceCell<()>>,
}

impl PgDocumentStore {
    /// Builds a pool without opening a connection. Connections are made on
    /// first use, so an unreachable server surfaces as per-request errors.
    pub fn connect_lazy(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy(&config.url)
            .map_err(|e| StoreError::InvalidUrl(e.to_string()))?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            schema: Arc::new(OnceCell::new()),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies pending migrations unless an earlier call already did.
    pub async fn migrate(&self) -> StoreResult<()> {
        self.schema
            .get_or_try_init(|| async {
                sqlx::migrate!("./migrations").run(&self.pool).await?;
                info!("Document schema migrated");
                Ok::<(), StoreError>(())
            })
            .await?;
        Ok(())
    }

    pub fn is_migrated(&self) -> bool {
        self.schema.initialized()
    }

    pub async fn find_all(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        self.migrate().await?;

        let rows = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT {COLUMNS} FROM documents WHERE collection = $1 ORDER BY seq"
        ))
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredDocument::from).collect())
    }

    pub async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<StoredDocument>> {
        self.migrate().await?;

        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT {COLUMNS} FROM documents WHERE collection = $1 AND id = $2"
        ))
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoredDocument::from))
    }

    pub async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Option<StoredDocument>> {
        self.migrate().await?;

        let mut filter = Body::new();
        filter.insert(field.to_string(), value.clone());

        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT {COLUMNS} FROM documents WHERE collection = $1 AND body @> $2 ORDER BY seq LIMIT 1"
        ))
        .bind(collection)
        .bind(Json(filter))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoredDocument::from))
    }

    pub async fn insert(&self, collection: &str, body: Body) -> StoreResult<StoredDocument> {
        self.migrate().await?;

        let id = Uuid::new_v4();
        debug!(db.collection = %collection, document.id = %id, "Inserting document");

        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(collection)
        .bind(id)
        .bind(Json(strip_reserved(body)))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn update(
        &self,
        collection: &str,
        id: Uuid,
        patch: Body,
    ) -> StoreResult<Option<StoredDocument>> {
        self.migrate().await?;

        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "UPDATE documents SET body = body || $3, updated_at = NOW()
             WHERE collection = $1 AND id = $2
             RETURNING {COLUMNS}"
        ))
        .bind(collection)
        .bind(id)
        .bind(Json(strip_reserved(patch)))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoredDocument::from))
    }

    pub async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<bool> {
        self.migrate().await?;

        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
