use serde_json::Value;
use tracing::{info, instrument, warn};

use registrar_auth::create_access_token;
use registrar_config::JwtConfig;
use registrar_core::{AppError, verify_password};
use registrar_db::DocumentStore;
use registrar_models::{Account, LoginRequest, LoginResponse};

use crate::metrics::{track_jwt_issued, track_login_failure, track_login_success};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    /// Checks an account's credentials and issues a session token.
    ///
    /// Unknown email and wrong password fail identically.
    #[instrument(skip_all, fields(role = %A::ROLE, db.collection = A::COLLECTION))]
    pub async fn login<A: Account>(
        store: &DocumentStore,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let role = A::ROLE.as_str();

        let Some(document) = store
            .find_one(A::COLLECTION, "email", &Value::String(dto.email.clone()))
            .await?
        else {
            warn!("Login attempt for unknown email");
            track_login_failure(role, "unknown_email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        let hash = A::PASSWORD_FIELD
            .and_then(|field| document.field(field))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                track_login_failure(role, "no_password");
                AppError::unauthorized(INVALID_CREDENTIALS)
            })?;

        if !verify_password(&dto.password, hash)? {
            warn!(account.id = %document.id, "Login attempt with wrong password");
            track_login_failure(role, "wrong_password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let account: A = document.decode()?;
        let user = account.identity();
        let token = create_access_token(&user, jwt_config)?;

        track_login_success(role);
        track_jwt_issued();
        info!(account.id = %user.id, "Login successful");

        Ok(LoginResponse { token, user })
    }
}
