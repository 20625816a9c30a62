use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_notice, delete_notice, fetch_notice, fetch_notices, update_notice,
};

pub fn init_notices_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all", get(fetch_notices))
        .route("/fetch-single/{id}", get(fetch_notice))
        .route("/create", post(create_notice))
        .route("/update/{id}", patch(update_notice))
        .route("/delete/{id}", delete(delete_notice))
}
