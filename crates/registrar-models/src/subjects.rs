//! Subjects taught at a school.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use registrar_core::serde::deserialize_optional_uuid;

use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Subject {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub school: Option<Uuid>,
    pub subject_name: String,
    /// Short code, unique across all subjects (e.g. `MATH101`).
    pub subject_codename: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateSubjectDto {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub school: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "Subject name is required"))]
    pub subject_name: String,
    #[validate(length(min = 1, max = 20, message = "Subject codename is required"))]
    pub subject_codename: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateSubjectDto {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub school: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "Subject name cannot be empty"))]
    pub subject_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 20, message = "Subject codename cannot be empty"))]
    pub subject_codename: Option<String>,
}

impl Resource for Subject {
    const COLLECTION: &'static str = "subjects";
    const LABEL: &'static str = "Subject";
    const UNIQUE_FIELDS: &'static [&'static str] = &["subject_codename"];

    type Create = CreateSubjectDto;
    type Update = UpdateSubjectDto;
}
