//! The contract between an entity type and the generic CRUD service.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use registrar_core::AppError;

/// An entity stored as one document per record in its own collection.
pub trait Resource: Serialize + DeserializeOwned + ToSchema + Send + Sync + 'static {
    /// Collection the documents live in.
    const COLLECTION: &'static str;

    /// Human-readable singular name used in response messages.
    const LABEL: &'static str;

    /// Fields whose values must not repeat within the collection.
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    /// Field holding a plaintext password on input; stored hashed.
    const PASSWORD_FIELD: Option<&'static str> = None;

    type Create: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;
    type Update: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;

    /// Cross-field rules checked against the full document: the create body,
    /// or the existing document with the patch applied.
    fn check_document(_document: &Map<String, Value>) -> Result<(), AppError> {
        Ok(())
    }
}

/// Serializes a DTO into a document body.
pub fn to_body<T: Serialize>(value: &T) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::internal(anyhow::anyhow!(
            "Expected a JSON object, got {}",
            other
        ))),
    }
}

/// Human form of a field name, `subject_codename` -> `subject codename`.
pub fn field_label(field: &str) -> String {
    field.replace('_', " ")
}
