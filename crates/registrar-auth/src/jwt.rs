//! Token creation and verification.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use registrar_config::JwtConfig;
use registrar_core::AppError;

use crate::claims::{Claims, Identity};

/// Signs a session token for `identity`, valid for `access_token_expiry` seconds.
pub fn create_access_token(identity: &Identity, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.access_token_expiry).max(0) as usize;

    let claims = Claims {
        sub: identity.id.to_string(),
        name: identity.name.clone(),
        email: identity.email.clone(),
        role: identity.role,
        school_id: identity.school_id,
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Checks signature and expiry and returns the claims.
///
/// # Errors
///
/// Unauthorized if the token is malformed, expired, or signed with another secret.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
