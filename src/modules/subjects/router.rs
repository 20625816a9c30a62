use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_subject, delete_subject, fetch_subject, fetch_subjects, update_subject,
};

pub fn init_subjects_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all", get(fetch_subjects))
        .route("/fetch-single/{id}", get(fetch_subject))
        .route("/create", post(create_subject))
        .route("/update/{id}", patch(update_subject))
        .route("/delete/{id}", delete(delete_subject))
}
