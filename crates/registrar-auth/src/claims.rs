//! JWT claims and the identity they describe.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Which kind of account a token was issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    School,
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::School => "SCHOOL",
            Role::Student => "STUDENT",
            Role::Teacher => "TEACHER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated caller, as reported by the auth check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Tenant the account belongs to. A school account is its own tenant.
    pub school_id: Option<Uuid>,
}

/// JWT claims for session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID (subject claim)
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub school_id: Option<Uuid>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    /// Rebuilds the identity. Returns `None` when `sub` is not a UUID, which
    /// only happens for tokens this service did not issue.
    pub fn identity(&self) -> Option<Identity> {
        let id = Uuid::parse_str(&self.sub).ok()?;
        Some(Identity {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            school_id: self.school_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: String) -> Claims {
        Claims {
            sub,
            name: "Greenfield High".to_string(),
            email: "office@greenfield.test".to_string(),
            role: Role::School,
            school_id: None,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), r#""TEACHER""#);
        let role: Role = serde_json::from_str(r#""STUDENT""#).unwrap();
        assert_eq!(role, Role::Student);
        assert_eq!(Role::School.to_string(), "SCHOOL");
    }

    #[test]
    fn test_identity_from_claims() {
        let id = Uuid::new_v4();
        let identity = claims(id.to_string()).identity().unwrap();
        assert_eq!(identity.id, id);
        assert_eq!(identity.role, Role::School);
        assert_eq!(identity.email, "office@greenfield.test");
    }

    #[test]
    fn test_identity_rejects_non_uuid_subject() {
        assert!(claims("user-123".to_string()).identity().is_none());
    }
}
