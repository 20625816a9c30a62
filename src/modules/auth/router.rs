use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::check_auth;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/check", get(check_auth))
}
