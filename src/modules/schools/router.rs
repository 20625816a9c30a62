use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_school, delete_school, fetch_school, fetch_schools, login_school, update_school,
};

pub fn init_schools_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all", get(fetch_schools))
        .route("/fetch-single/{id}", get(fetch_school))
        .route("/create", post(create_school))
        .route("/update/{id}", patch(update_school))
        .route("/delete/{id}", delete(delete_school))
        .route("/login", post(login_school))
}
