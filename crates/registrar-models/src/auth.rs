//! Login payloads and the account-bearing entity trait.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use registrar_auth::{Identity, Role};

use crate::resource::Resource;

/// An entity that can log in. Its documents carry an `email` and a bcrypt
/// hash under [`Resource::PASSWORD_FIELD`].
pub trait Account: Resource {
    const ROLE: Role;

    fn identity(&self) -> Identity;
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_request_validation() {
        let req: LoginRequest =
            serde_json::from_value(json!({"email": "a@b.com", "password": ""})).unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("password"));
    }
}
