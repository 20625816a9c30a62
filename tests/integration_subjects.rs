mod common;

use axum::http::StatusCode;
use common::{create, fetch_all, send, setup_test_app};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_duplicate_codename_scenario() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/subject/create",
        Some(json!({"subject_name": "Math", "subject_codename": "MATH101"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Subject created successfully");

    let subjects = fetch_all(&app, "subject").await;
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["subject_codename"], "MATH101");

    let (status, body) = send(
        &app,
        "POST",
        "/api/subject/create",
        Some(json!({"subject_name": "Mathematics", "subject_codename": "MATH101"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Subject with this subject codename already exists"
    );

    assert_eq!(fetch_all(&app, "subject").await.len(), 1);
}

#[tokio::test]
async fn test_fetch_single_subject() {
    let app = setup_test_app();
    let subject = create(
        &app,
        "subject",
        json!({"subject_name": "Biology", "subject_codename": "BIO101"}),
    )
    .await;
    let id = subject["_id"].as_str().unwrap();

    let (status, body) = send(&app, "GET", &format!("/api/subject/fetch-single/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["subject_name"], "Biology");
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_partial_update_changes_only_supplied_fields() {
    let app = setup_test_app();
    let school = Uuid::new_v4();
    let subject = create(
        &app,
        "subject",
        json!({"school": school, "subject_name": "Chemistry", "subject_codename": "CHEM101"}),
    )
    .await;
    let id = subject["_id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/subject/update/{id}"),
        Some(json!({"subject_name": "Organic Chemistry"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Subject updated successfully");
    assert_eq!(body["data"]["subject_name"], "Organic Chemistry");
    assert_eq!(body["data"]["subject_codename"], "CHEM101");
    assert_eq!(body["data"]["school"], school.to_string());
    assert_eq!(body["data"]["created_at"], subject["created_at"]);
}

#[tokio::test]
async fn test_delete_removes_subject() {
    let app = setup_test_app();
    let subject = create(
        &app,
        "subject",
        json!({"subject_name": "History", "subject_codename": "HIS101"}),
    )
    .await;
    let id = subject["_id"].as_str().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/api/subject/delete/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Subject deleted successfully"}));

    let remaining = fetch_all(&app, "subject").await;
    assert!(remaining.iter().all(|s| s["_id"] != id));

    let (status, _) = send(&app, "DELETE", &format!("/api/subject/delete/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_ids_mutate_nothing() {
    let app = setup_test_app();
    create(
        &app,
        "subject",
        json!({"subject_name": "Art", "subject_codename": "ART101"}),
    )
    .await;

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/api/subject/update/{id}"),
            Some(json!({"subject_name": "Changed"})),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Subject not found");

        let (status, _) = send(&app, "DELETE", &format!("/api/subject/delete/{id}"), None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let subjects = fetch_all(&app, "subject").await;
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["subject_name"], "Art");
}

#[tokio::test]
async fn test_missing_field_and_validation_errors() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/subject/create",
        Some(json!({"subject_name": "Math"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "subject_codename is required");

    let (status, body) = send(
        &app,
        "POST",
        "/api/subject/create",
        Some(json!({"subject_name": "", "subject_codename": "X1"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Subject name is required");

    assert!(fetch_all(&app, "subject").await.is_empty());
}
