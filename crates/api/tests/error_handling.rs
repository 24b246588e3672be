//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use shiftplan_api::error::AppError;
use shiftplan_core::error::CoreError;
use shiftplan_store::error::{UQ_BLOCKED_USER_DAY, UQ_USERS_EMAIL};
use shiftplan_store::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound { entity: "Shift" });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Shift not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("name is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name is required");
}

// ---------------------------------------------------------------------------
// Test: CoreError::BlockedDay maps to 400 with BLOCKED_DAY code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blocked_day_error_returns_400_with_action() {
    let err = AppError::Core(CoreError::BlockedDay { action: "add" });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BLOCKED_DAY");
    assert_eq!(
        json["error"],
        "Cannot add shift to a blocked day. Please unblock the day first."
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::AlreadyBlocked maps to 400 with ALREADY_BLOCKED code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn already_blocked_error_returns_400() {
    let err = AppError::Core(CoreError::AlreadyBlocked);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "ALREADY_BLOCKED");
    assert_eq!(
        json["error"],
        "This day is already blocked. Please unblock it first or choose a different date."
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::ShiftsExist maps to 400 with SHIFTS_EXIST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shifts_exist_error_returns_400() {
    let err = AppError::Core(CoreError::ShiftsExist);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "SHIFTS_EXIST");
    assert_eq!(
        json["error"],
        "Cannot block a day that already has shifts. Please remove all shifts first."
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::Unauthorized maps to 401 with UNAUTHORIZED code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Unauthorized");
}

// ---------------------------------------------------------------------------
// Test: the blocked-day unique index maps onto the domain response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_block_constraint_returns_already_blocked() {
    let err = AppError::Store(StoreError::Duplicate {
        constraint: UQ_BLOCKED_USER_DAY.to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "ALREADY_BLOCKED");
    assert_eq!(
        json["error"],
        "This day is already blocked. Please unblock it first or choose a different date."
    );
}

// ---------------------------------------------------------------------------
// Test: the duplicate-email constraint maps to a validation response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_email_constraint_returns_validation_error() {
    let err = AppError::Store(StoreError::Duplicate {
        constraint: UQ_USERS_EMAIL.to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "A user with this email already exists");
}

// ---------------------------------------------------------------------------
// Test: an unrecognized constraint is a 500, not a guessed 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_constraint_returns_500() {
    let err = AppError::Store(StoreError::Duplicate {
        constraint: "uq_something_new".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_ERROR");
}

// ---------------------------------------------------------------------------
// Test: database errors map to 500 with STORE_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::RowNotFound));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_ERROR");
    assert!(json["error"].is_string());
}
