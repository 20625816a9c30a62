use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::CookieJar;

use registrar_auth::{Claims, Identity, verify_token};
use registrar_core::AppError;

use crate::metrics::track_auth_check;
use crate::state::AppState;

/// Name of the cookie a browser client keeps its session token in.
pub const TOKEN_COOKIE: &str = "token";

/// Extractor that validates the session token and provides its claims.
///
/// The token is read from `Authorization: Bearer <token>`, falling back to
/// the `token` cookie.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn identity(&self) -> Result<Identity, AppError> {
        self.0
            .identity()
            .ok_or_else(|| AppError::unauthorized("Invalid account ID in token"))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn cookie_token(parts: &Parts) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or_else(|| {
                track_auth_check(false);
                AppError::unauthorized("Not authenticated")
            })?;

        let claims = verify_token(&token, &state.jwt_config).inspect_err(|_| {
            track_auth_check(false);
        })?;

        track_auth_check(true);
        Ok(AuthUser(claims))
    }
}
