use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use registrar_core::serde::deserialize_optional_uuid;

use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Examination {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub school: Option<Uuid>,
    pub exam_date: NaiveDate,
    pub subject: Uuid,
    /// Free text such as "Midterm" or "Final".
    pub exam_type: String,
    pub class: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateExaminationDto {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub school: Option<Uuid>,
    pub exam_date: NaiveDate,
    pub subject: Uuid,
    #[validate(length(min = 1, max = 50, message = "Exam type is required"))]
    pub exam_type: String,
    pub class: Uuid,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateExaminationDto {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub school: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "Exam type cannot be empty"))]
    pub exam_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub class: Option<Uuid>,
}

impl Resource for Examination {
    const COLLECTION: &'static str = "examinations";
    const LABEL: &'static str = "Examination";

    type Create = CreateExaminationDto;
    type Update = UpdateExaminationDto;
}
