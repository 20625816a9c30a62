use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_student, delete_student, fetch_student, fetch_students, login_student, update_student,
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all", get(fetch_students))
        .route("/fetch-single/{id}", get(fetch_student))
        .route("/create", post(create_student))
        .route("/update/{id}", patch(update_student))
        .route("/delete/{id}", delete(delete_student))
        .route("/login", post(login_student))
}
