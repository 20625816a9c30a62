use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    create_attendance_record, delete_attendance_record, fetch_attendance_record, fetch_attendance_records, update_attendance_record,
};

pub fn init_attendance_router() -> Router<AppState> {
    Router::new()
        .route("/fetch-all", get(fetch_attendance_records))
        .route("/fetch-single/{id}", get(fetch_attendance_record))
        .route("/create", post(create_attendance_record))
        .route("/update/{id}", patch(update_attendance_record))
        .route("/delete/{id}", delete(delete_attendance_record))
}
