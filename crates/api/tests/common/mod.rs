//! Shared helpers for API integration tests.
//!
//! Every test app runs over a fresh [`MemStore`], so the suite needs no
//! database. Clones of the returned router share the store through
//! `AppState`, which lets a test send many requests against one dataset.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use shiftplan_api::config::ServerConfig;
use shiftplan_api::router::build_app_router;
use shiftplan_api::state::AppState;
use shiftplan_store::MemStore;

/// Bearer token accepted by [`test_config`].
pub const TEST_TOKEN: &str = "test-token";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:4200` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_token: TEST_TOKEN.to_string(),
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(MemStore::new()),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Send a request carrying the test bearer token.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    send_with_token(app, method, uri, Some(TEST_TOKEN), body).await
}

/// Send a request with full control over the Authorization header.
/// `token: None` omits the header entirely.
pub async fn send_with_token(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Authenticated GET shorthand.
pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a user through the API and return the response row.
pub async fn seed_user(app: &Router, name: &str, email: &str) -> serde_json::Value {
    let response = send(
        app,
        Method::POST,
        "/api/users",
        Some(serde_json::json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
