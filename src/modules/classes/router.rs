use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_class, delete_class, fetch_class, fetch_classes, update_class,
};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all", get(fetch_classes))
        .route("/fetch-single/{id}", get(fetch_class))
        .route("/create", post(create_class))
        .route("/update/{id}", patch(update_class))
        .route("/delete/{id}", delete(delete_class))
}
