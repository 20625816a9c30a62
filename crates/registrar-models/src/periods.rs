//! Timetable periods: one teacher teaching one subject to one class.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use registrar_core::AppError;
use registrar_core::serde::deserialize_optional_uuid;

use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Period {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub school: Option<Uuid>,
    pub teacher: Uuid,
    pub subject: Uuid,
    pub class: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePeriodDto {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub school: Option<Uuid>,
    pub teacher: Uuid,
    pub subject: Uuid,
    pub class: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePeriodDto {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub school: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub teacher: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub class: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

fn timestamp(document: &Map<String, Value>, field: &str) -> Option<DateTime<Utc>> {
    let raw = document.get(field)?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

impl Resource for Period {
    const COLLECTION: &'static str = "periods";
    const LABEL: &'static str = "Period";

    type Create = CreatePeriodDto;
    type Update = UpdatePeriodDto;

    fn check_document(document: &Map<String, Value>) -> Result<(), AppError> {
        match (
            timestamp(document, "start_time"),
            timestamp(document, "end_time"),
        ) {
            (Some(start), Some(end)) if end <= start => Err(AppError::unprocessable(anyhow!(
                "end_time must be after start_time"
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_end_before_start_rejected() {
        let doc = document(json!({
            "start_time": "2025-01-06T10:00:00Z",
            "end_time": "2025-01-06T09:00:00Z"
        }));
        let err = Period::check_document(&doc).unwrap_err();
        assert_eq!(err.status.as_u16(), 422);
    }

    #[test]
    fn test_equal_times_rejected() {
        let doc = document(json!({
            "start_time": "2025-01-06T10:00:00Z",
            "end_time": "2025-01-06T10:00:00Z"
        }));
        assert!(Period::check_document(&doc).is_err());
    }

    #[test]
    fn test_offsets_are_compared_as_instants() {
        let doc = document(json!({
            "start_time": "2025-01-06T10:00:00+01:00",
            "end_time": "2025-01-06T09:30:00Z"
        }));
        assert!(Period::check_document(&doc).is_ok());
    }

    #[test]
    fn test_partial_document_passes() {
        let doc = document(json!({"start_time": "2025-01-06T10:00:00Z"}));
        assert!(Period::check_document(&doc).is_ok());
    }
}
