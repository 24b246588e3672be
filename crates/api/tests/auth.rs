//! Integration tests for the bearer-token gate.
//!
//! Every `/api` route requires `Authorization: Bearer <token>`; the health
//! probe does not. Failures are uniform 401s that never reveal whether the
//! header was missing, malformed, or simply wrong.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, send_with_token, TEST_TOKEN};

// ---------------------------------------------------------------------------
// Test: missing Authorization header returns 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_token_returns_401() {
    let app = common::build_test_app();
    let response = send_with_token(&app, Method::GET, "/api/users", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: wrong token returns 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_token_returns_401() {
    let app = common::build_test_app();
    let response =
        send_with_token(&app, Method::GET, "/api/users", Some("not-the-token"), None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
}

// ---------------------------------------------------------------------------
// Test: non-Bearer scheme returns 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_bearer_scheme_returns_401() {
    let app = common::build_test_app();

    // Send the right token under the wrong scheme.
    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/api/users")
        .header("Authorization", format!("Basic {TEST_TOKEN}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: valid token is accepted on every resource
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_token_is_accepted() {
    let app = common::build_test_app();

    for uri in ["/api/users", "/api/shifts/00000000-0000-0000-0000-000000000000"] {
        let response = common::get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri} should pass the gate");
    }
}

// ---------------------------------------------------------------------------
// Test: mutations are gated too
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mutations_without_token_return_401() {
    let app = common::build_test_app();

    let body = serde_json::json!({ "name": "Eve", "email": "eve@example.com" });
    let response = send_with_token(&app, Method::POST, "/api/users", None, Some(body)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
