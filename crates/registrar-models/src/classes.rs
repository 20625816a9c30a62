//! Classes (form groups) within a school.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use registrar_core::serde::deserialize_optional_uuid;

use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Class {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub school: Option<Uuid>,
    /// Display name, e.g. "Grade 5 - Blue".
    pub class_text: String,
    pub class_num: u32,
    /// Class teacher.
    pub attendee: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateClassDto {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub school: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "Class text is required"))]
    pub class_text: String,
    #[validate(range(min = 1, max = 99, message = "Class number must be between 1 and 99"))]
    pub class_num: u32,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub attendee: Option<Uuid>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateClassDto {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub school: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "Class text cannot be empty"))]
    pub class_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 99, message = "Class number must be between 1 and 99"))]
    pub class_num: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub attendee: Option<Uuid>,
}

impl Resource for Class {
    const COLLECTION: &'static str = "classes";
    const LABEL: &'static str = "Class";

    type Create = CreateClassDto;
    type Update = UpdateClassDto;
}
