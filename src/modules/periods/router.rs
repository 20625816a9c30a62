use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_period, delete_period, fetch_period, fetch_periods, update_period,
};

pub fn init_periods_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all", get(fetch_periods))
        .route("/fetch-single/{id}", get(fetch_period))
        .route("/create", post(create_period))
        .route("/update/{id}", patch(update_period))
        .route("/delete/{id}", delete(delete_period))
}
