use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use registrar_auth::{Identity, Role};
use registrar_core::serde::deserialize_optional_uuid;

use crate::auth::Account;
use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Teacher {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub school: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub qualification: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub teacher_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateTeacherDto {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub school: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(max = 200))]
    pub qualification: Option<String>,
    #[validate(range(min = 18, max = 100, message = "Age must be between 18 and 100"))]
    pub age: Option<u32>,
    #[validate(length(max = 20))]
    pub gender: Option<String>,
    #[validate(url(message = "Teacher image must be a URL"))]
    pub teacher_image: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateTeacherDto {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub school: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 18, max = 100, message = "Age must be between 18 and 100"))]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20))]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Teacher image must be a URL"))]
    pub teacher_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

impl Resource for Teacher {
    const COLLECTION: &'static str = "teachers";
    const LABEL: &'static str = "Teacher";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email"];
    const PASSWORD_FIELD: Option<&'static str> = Some("password");

    type Create = CreateTeacherDto;
    type Update = UpdateTeacherDto;
}

impl Account for Teacher {
    const ROLE: Role = Role::Teacher;

    fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: Self::ROLE,
            school_id: self.school,
        }
    }
}
