mod common;

use axum::http::StatusCode;
use common::{create, fetch_all, generate_unique_email, send, setup_test_app};
use serde_json::{Value, json};
use uuid::Uuid;

/// A valid create payload and a partial update for each entity segment.
fn cases() -> Vec<(&'static str, Value, Value)> {
    let school = Uuid::new_v4();
    let class = Uuid::new_v4();
    let subject = Uuid::new_v4();

    vec![
        (
            "school",
            json!({
                "school_name": "Hillside College",
                "email": generate_unique_email(),
                "owner_name": "Chidi Okeke",
                "password": "password123"
            }),
            json!({"owner_name": "Ngozi Okeke"}),
        ),
        (
            "student",
            json!({
                "school": school,
                "name": "Amaka Eze",
                "email": generate_unique_email(),
                "student_class": class,
                "age": 12,
                "gender": "female",
                "guardian": "Mr Eze",
                "guardian_phone": "+2348000000000",
                "password": "password123"
            }),
            json!({"age": 13}),
        ),
        (
            "teacher",
            json!({
                "school": school,
                "name": "Mr Adeyemi",
                "email": generate_unique_email(),
                "qualification": "M.Sc Physics",
                "age": 38,
                "gender": "male",
                "password": "password123"
            }),
            json!({"qualification": "PhD Physics"}),
        ),
        (
            "class",
            json!({"school": school, "class_text": "JSS 1A", "class_num": 7, "attendee": ""}),
            json!({"class_text": "JSS 1B"}),
        ),
        (
            "subject",
            json!({"school": school, "subject_name": "Physics", "subject_codename": "PHY101"}),
            json!({"subject_name": "Applied Physics"}),
        ),
        (
            "examination",
            json!({
                "school": school,
                "exam_date": "2025-07-01",
                "subject": subject,
                "exam_type": "Midterm",
                "class": class
            }),
            json!({"exam_type": "Final"}),
        ),
        (
            "attendance",
            json!({
                "school": school,
                "student": Uuid::new_v4(),
                "class": class,
                "date": "2025-03-14",
                "status": "Present"
            }),
            json!({"status": "Absent"}),
        ),
        (
            "period",
            json!({
                "school": school,
                "teacher": Uuid::new_v4(),
                "subject": subject,
                "class": class,
                "start_time": "2025-03-14T08:00:00Z",
                "end_time": "2025-03-14T08:45:00Z"
            }),
            json!({"end_time": "2025-03-14T09:00:00Z"}),
        ),
        (
            "notices",
            json!({
                "school": school,
                "title": "Sports Day",
                "message": "Sports day holds on Friday.",
                "audience": "all"
            }),
            json!({"audience": "student"}),
        ),
    ]
}

#[tokio::test]
async fn test_crud_lifecycle_for_every_entity() {
    let app = setup_test_app();

    for (segment, payload, patch) in cases() {
        let created = create(&app, segment, payload.clone()).await;
        let id = created["_id"].as_str().unwrap().to_string();

        let listed = fetch_all(&app, segment).await;
        assert_eq!(
            listed.iter().filter(|r| r["_id"] == id.as_str()).count(),
            1,
            "{segment} should be listed exactly once"
        );

        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/api/{segment}/update/{id}"),
            Some(patch.clone()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK, "update {segment}: {body}");

        let updated = &body["data"];
        for (key, value) in patch.as_object().unwrap() {
            assert_eq!(&updated[key], value, "{segment}.{key} not updated");
        }
        for (key, value) in payload.as_object().unwrap() {
            if key == "password" || patch.get(key).is_some() || value == "" {
                continue;
            }
            assert_eq!(&updated[key], value, "{segment}.{key} changed unexpectedly");
        }

        let (status, _) = send(&app, "DELETE", &format!("/api/{segment}/delete/{id}"), None, None).await;
        assert_eq!(status, StatusCode::OK);

        let listed = fetch_all(&app, segment).await;
        assert!(listed.iter().all(|r| r["_id"] != id.as_str()));

        let (status, body) = send(&app, "GET", &format!("/api/{segment}/fetch-single/{id}"), None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn test_collections_are_independent() {
    let app = setup_test_app();

    create(
        &app,
        "subject",
        json!({"subject_name": "Music", "subject_codename": "MUS101"}),
    )
    .await;

    assert_eq!(fetch_all(&app, "subject").await.len(), 1);
    assert!(fetch_all(&app, "class").await.is_empty());
    assert!(fetch_all(&app, "notices").await.is_empty());
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let app = setup_test_app();

    for title in ["First", "Second", "Third"] {
        create(
            &app,
            "notices",
            json!({"title": title, "message": "Body", "audience": "teacher"}),
        )
        .await;
    }

    let titles: Vec<_> = fetch_all(&app, "notices")
        .await
        .iter()
        .map(|n| n["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_enum_fields_reject_unknown_values() {
    let app = setup_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/attendance/create",
        Some(json!({
            "student": Uuid::new_v4(),
            "class": Uuid::new_v4(),
            "date": "2025-03-14",
            "status": "Late"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(fetch_all(&app, "attendance").await.is_empty());
}

#[tokio::test]
async fn test_messages_name_the_entity() {
    let app = setup_test_app();
    let labels = [
        ("school", "School"),
        ("student", "Student"),
        ("teacher", "Teacher"),
        ("class", "Class"),
        ("subject", "Subject"),
        ("examination", "Examination"),
        ("attendance", "Attendance"),
        ("period", "Period"),
        ("notices", "Notice"),
    ];

    for ((segment, payload, patch), (label_segment, label)) in cases().into_iter().zip(labels) {
        assert_eq!(segment, label_segment);

        let (status, body) =
            send(&app, "POST", &format!("/api/{segment}/create"), Some(payload), None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], format!("{label} created successfully"));
        let id = body["data"]["_id"].as_str().unwrap().to_string();

        let (_, body) = send(
            &app,
            "PATCH",
            &format!("/api/{segment}/update/{id}"),
            Some(patch),
            None,
        )
        .await;
        assert_eq!(body["message"], format!("{label} updated successfully"));

        let (_, body) = send(&app, "DELETE", &format!("/api/{segment}/delete/{id}"), None, None).await;
        assert_eq!(body, json!({"success": true, "message": format!("{label} deleted successfully")}));

        let (status, body) = send(&app, "GET", &format!("/api/{segment}/fetch-single/{id}"), None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], format!("{label} not found"));
    }
}
