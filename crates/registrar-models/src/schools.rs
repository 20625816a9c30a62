//! Schools: the tenants. A school is also a login account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use registrar_auth::{Identity, Role};

use crate::auth::Account;
use crate::resource::Resource;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct School {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub school_name: String,
    pub email: String,
    pub owner_name: String,
    pub school_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateSchoolDto {
    #[validate(length(min = 1, max = 200, message = "School name is required"))]
    pub school_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Owner name is required"))]
    pub owner_name: String,
    #[validate(url(message = "School image must be a URL"))]
    pub school_image: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateSchoolDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "School name cannot be empty"))]
    pub school_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "Owner name cannot be empty"))]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "School image must be a URL"))]
    pub school_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

impl Resource for School {
    const COLLECTION: &'static str = "schools";
    const LABEL: &'static str = "School";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email"];
    const PASSWORD_FIELD: Option<&'static str> = Some("password");

    type Create = CreateSchoolDto;
    type Update = UpdateSchoolDto;
}

impl Account for School {
    const ROLE: Role = Role::School;

    fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            name: self.school_name.clone(),
            email: self.email.clone(),
            role: Self::ROLE,
            school_id: Some(self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn school() -> School {
        let now = Utc::now();
        School {
            id: Uuid::new_v4(),
            school_name: "Greenfield Academy".to_string(),
            email: "admin@greenfield.edu".to_string(),
            owner_name: "Ada Obi".to_string(),
            school_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_school_is_its_own_tenant() {
        let school = school();
        let identity = school.identity();
        assert_eq!(identity.school_id, Some(school.id));
        assert_eq!(identity.role, Role::School);
        assert_eq!(identity.name, "Greenfield Academy");
    }

    #[test]
    fn test_record_never_serializes_password() {
        let value = serde_json::to_value(school()).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("_id").is_some());
    }

    #[test]
    fn test_create_dto_validation() {
        let dto: CreateSchoolDto = serde_json::from_value(json!({
            "school_name": "Greenfield",
            "email": "not-an-email",
            "owner_name": "Ada",
            "password": "short"
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
