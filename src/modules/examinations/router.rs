use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_examination, delete_examination, fetch_examination, fetch_examinations, update_examination,
};

pub fn init_examinations_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all", get(fetch_examinations))
        .route("/fetch-single/{id}", get(fetch_examination))
        .route("/create", post(create_examination))
        .route("/update/{id}", patch(update_examination))
        .route("/delete/{id}", delete(delete_examination))
}
