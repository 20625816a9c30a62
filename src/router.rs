use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use registrar_config::CorsConfig;
use registrar_core::MessageResponse;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::modules::attendance::router::init_attendance_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::init_classes_router;
use crate::modules::examinations::router::init_examinations_router;
use crate::modules::notices::router::init_notices_router;
use crate::modules::periods::router::init_periods_router;
use crate::modules::schools::router::init_schools_router;
use crate::modules::students::router::init_students_router;
use crate::modules::subjects::router::init_subjects_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;

async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::ok("Server is running"))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    // A one-entry list omits the allow-origin header for any other origin.
    match config.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(AllowOrigin::list([origin])),
        Err(_) => {
            warn!(origin = %config.allowed_origin, "Ignoring unparseable CORS origin");
            layer
        }
    }
}

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/school", init_schools_router())
                .nest("/student", init_students_router())
                .nest("/teacher", init_teachers_router())
                .nest("/class", init_classes_router())
                .nest("/subject", init_subjects_router())
                .nest("/examination", init_examinations_router())
                .nest("/attendance", init_attendance_router())
                .nest("/period", init_periods_router())
                .nest("/notices", init_notices_router()),
        )
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use registrar_config::JwtConfig;
    use registrar_db::DocumentStore;
    use tower::ServiceExt;

    fn app() -> Router {
        init_router(AppState::new(
            DocumentStore::memory(),
            JwtConfig {
                secret: "router-test-secret".to_string(),
                access_token_expiry: 3600,
            },
            CorsConfig::default(),
        ))
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin_only() {
        let preflight = |origin: &'static str| {
            Request::builder()
                .method("OPTIONS")
                .uri("/api/subject/fetch-all")
                .header("origin", origin)
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .unwrap()
        };

        let response = app().oneshot(preflight("http://localhost:5173")).await.unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
        assert_eq!(response.headers()["access-control-allow-credentials"], "true");

        let response = app().oneshot(preflight("http://evil.example")).await.unwrap();
        assert!(response.headers().get("access-control-allow-origin").is_none());
    }
}
