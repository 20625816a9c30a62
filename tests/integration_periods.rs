mod common;

use axum::http::StatusCode;
use common::{create, fetch_all, send, setup_test_app};
use serde_json::{Value, json};
use uuid::Uuid;

fn period(start: &str, end: &str) -> Value {
    json!({
        "teacher": Uuid::new_v4(),
        "subject": Uuid::new_v4(),
        "class": Uuid::new_v4(),
        "start_time": start,
        "end_time": end
    })
}

#[tokio::test]
async fn test_end_must_follow_start_on_create() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/period/create",
        Some(period("2025-03-14T10:00:00Z", "2025-03-14T09:00:00Z")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "end_time must be after start_time");
    assert!(fetch_all(&app, "period").await.is_empty());
}

#[tokio::test]
async fn test_update_checks_merged_times() {
    let app = setup_test_app();
    let created = create(
        &app,
        "period",
        period("2025-03-14T08:00:00Z", "2025-03-14T08:45:00Z"),
    )
    .await;
    let id = created["_id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/period/update/{id}"),
        Some(json!({"end_time": "2025-03-14T07:30:00Z"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/period/update/{id}"),
        Some(json!({"start_time": "2025-03-14T07:00:00Z", "end_time": "2025-03-14T07:30:00Z"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["teacher"], created["teacher"]);

    let (_, body) = send(&app, "GET", &format!("/api/period/fetch-single/{id}"), None, None).await;
    let start: chrono::DateTime<chrono::Utc> = serde_json::from_value(body["data"]["start_time"].clone()).unwrap();
    assert_eq!(start.to_rfc3339(), "2025-03-14T07:00:00+00:00");
}
