//! Axum routes in front of the request gateway.

use std::time::Duration;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::gateway::{GatewayResponse, RequestGateway};

/// Largest request body accepted by the validate route.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
struct AppState {
    gateway: RequestGateway,
    deadline: Duration,
}

/// Builds the router.
///
/// - `GET /health`
/// - `POST /password/validate`
///
/// `deadline` bounds reading the body and producing the verdict; once it
/// passes the request is answered with 408.
pub fn routes(gateway: RequestGateway, deadline: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/password/validate", post(validate_password))
        .with_state(AppState { gateway, deadline })
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

async fn validate_password(State(state): State<AppState>, request: Request) -> GatewayResponse {
    let body = to_bytes(request.into_body(), MAX_BODY_BYTES);

    match tokio::time::timeout(state.deadline, body).await {
        Ok(Ok(bytes)) => state.gateway.handle_body(&bytes),
        Ok(Err(err)) => state.gateway.unreadable(err),
        Err(_) => {
            tracing::warn!(
                deadline_secs = state.deadline.as_secs(),
                "request deadline exceeded"
            );
            GatewayResponse::error(
                StatusCode::REQUEST_TIMEOUT.as_u16(),
                "request deadline exceeded",
            )
        }
    }
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ValidationService;
    use crate::store::InMemoryAttemptStore;
    use axum::body::{Body, Bytes};
    use axum::http::Request as HttpRequest;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let store = Arc::new(InMemoryAttemptStore::new());
        let gateway = RequestGateway::new(ValidationService::new(store));
        routes(gateway, Duration::from_secs(10))
    }

    async fn post_validate(body: impl Into<Body>) -> (StatusCode, Value) {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/password/validate")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = HttpRequest::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_validate_valid_password() {
        let (status, body) = post_validate(r#"{"password":"AbTp9!fok"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "isValid": true }));
    }

    #[tokio::test]
    async fn test_validate_short_password() {
        let (status, body) = post_validate(r#"{"password":"12345678"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("9 characters"));
    }

    #[tokio::test]
    async fn test_validate_repeated_password() {
        let (status, body) = post_validate(r#"{"password":"AbTp9!foA"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("repeated characters"));
    }

    #[tokio::test]
    async fn test_validate_malformed_json() {
        let (status, body) = post_validate("error").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test(start_paused = true)]
    async fn test_validate_deadline_exceeded() {
        let store = Arc::new(InMemoryAttemptStore::new());
        let gateway = RequestGateway::new(ValidationService::new(store));
        let app = routes(gateway, Duration::from_secs(1));

        let stalled = futures::stream::pending::<Result<Bytes, std::io::Error>>();
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/password/validate")
            .body(Body::from_stream(stalled))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("deadline"));
    }

    #[tokio::test]
    async fn test_validate_oversized_body() {
        let password = "a".repeat(MAX_BODY_BYTES);
        let (status, _) = post_validate(format!(r#"{{"password":"{}"}}"#, password)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
