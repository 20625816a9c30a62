use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use registrar::registrar_config::{CorsConfig, JwtConfig};
use registrar::registrar_db::DocumentStore;
use registrar::router::init_router;
use registrar::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

#[allow(dead_code)]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

/// Application backed by a fresh in-memory store.
pub fn setup_test_app() -> Router {
    init_router(AppState::new(
        DocumentStore::memory(),
        test_jwt_config(),
        CorsConfig::default(),
    ))
}

/// Sends one request and returns the status and decoded JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[allow(dead_code)]
pub async fn fetch_all(app: &Router, segment: &str) -> Vec<Value> {
    let (status, body) = send(app, "GET", &format!("/api/{segment}/fetch-all"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    body["data"].as_array().cloned().unwrap_or_default()
}

#[allow(dead_code)]
pub async fn create(app: &Router, segment: &str, payload: Value) -> Value {
    let (status, body) = send(app, "POST", &format!("/api/{segment}/create"), Some(payload), None).await;
    assert_eq!(status, StatusCode::CREATED, "create {segment} failed: {body}");
    body["data"].clone()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn school_payload(email: &str, password: &str) -> Value {
    json!({
        "school_name": "Greenfield Academy",
        "email": email,
        "owner_name": "Ada Obi",
        "password": password
    })
}
