use axum::Json;
use tracing::instrument;

use registrar_auth::Identity;
use registrar_core::{ApiResponse, AppError, ErrorResponse};

use crate::middleware::auth::AuthUser;

#[utoipa::path(
    get,
    path = "/api/auth/check",
    responses(
        (status = 200, description = "The caller is authenticated", body = ApiResponse<Identity>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []), ("cookie_auth" = []))
)]
#[instrument(skip(auth_user), fields(account.id = %auth_user.0.sub))]
pub async fn check_auth(auth_user: AuthUser) -> Result<Json<ApiResponse<Identity>>, AppError> {
    let identity = auth_user.identity()?;
    Ok(Json(ApiResponse::with_message("Authenticated", identity)))
}
