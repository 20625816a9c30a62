//! # Registrar DB
//!
//! The document store behind the Registrar API.
//!
//! Each entity lives in its own logical collection of JSON documents.
//! [`DocumentStore`] is the single handle the server shares across requests;
//! it is backed either by PostgreSQL (JSONB rows, see `migrations/`) or by an
//! in-process map selected with a `memory://` URL.
//!
//! # Example
//!
//! ```ignore
//! use registrar_config::DatabaseConfig;
//! use registrar_db::DocumentStore;
//!
//! let store = DocumentStore::connect(&DatabaseConfig::from_env())?;
//! let subjects = store.find_all("subjects").await?;
//! ```

pub mod document;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use document::{Body, ID_FIELD, StoredDocument};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use store::DocumentStore;
