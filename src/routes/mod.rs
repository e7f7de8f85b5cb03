//! Router assembly.

mod common;
mod sport;

pub use common::common_routes;
pub use sport::sport_routes;

use crate::error::AppError;
use crate::response::ErrorMessage;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

const REDACTED: &str = "Internal server error";

/// Full application: sport and common routes, body limit, request tracing,
/// and optional redaction of 500 bodies.
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(sport_routes(state.clone()))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state, redact_internal_errors))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Swap the body of a 500 for a generic message. Status, headers and extensions
/// set by the inner service are kept.
async fn redact_internal_errors(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if !state.redact_internal_errors || response.status() != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }
    let (mut parts, _) = response.into_parts();
    let (_, body) = Json(ErrorMessage::new(REDACTED)).into_response().into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts
        .headers
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::from_parts(parts, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySportRepository;
    use axum::{body::Body, routing::get};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn failing_app(redact: bool) -> Router {
        let state = AppState {
            repo: Arc::new(InMemorySportRepository::new()),
            redact_internal_errors: redact,
        };
        Router::new()
            .route(
                "/boom",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        [("x-request-id", "req-42"), ("content-type", "text/plain")],
                        "connection refused",
                    )
                }),
            )
            .layer(middleware::from_fn_with_state(state, redact_internal_errors))
    }

    async fn call(app: Router) -> Response {
        let req = Request::builder().uri("/boom").body(Body::empty()).unwrap();
        app.oneshot(req).await.unwrap()
    }

    #[tokio::test]
    async fn redaction_keeps_inner_headers() {
        let response = call(failing_app(true)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["x-request-id"], "req-42");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, serde_json::json!({"error_message": REDACTED}));
    }

    #[tokio::test]
    async fn unredacted_response_passes_through() {
        let response = call(failing_app(false)).await;
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"connection refused");
    }
}
