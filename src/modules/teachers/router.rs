use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_teacher, delete_teacher, fetch_teacher, fetch_teachers, login_teacher, update_teacher,
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all", get(fetch_teachers))
        .route("/fetch-single/{id}", get(fetch_teacher))
        .route("/create", post(create_teacher))
        .route("/update/{id}", patch(update_teacher))
        .route("/delete/{id}", delete(delete_teacher))
        .route("/login", post(login_teacher))
}
