use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shiftplan_core::error::CoreError;
use shiftplan_store::error::{StoreError, UQ_BLOCKED_USER_DAY, UQ_USERS_EMAIL};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the shape `{"error": message, "code": CODE}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `shiftplan_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `shiftplan_store`.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::BlockedDay { .. } => {
                    (StatusCode::BAD_REQUEST, "BLOCKED_DAY", core.to_string())
                }
                CoreError::AlreadyBlocked => {
                    (StatusCode::BAD_REQUEST, "ALREADY_BLOCKED", core.to_string())
                }
                CoreError::ShiftsExist => {
                    (StatusCode::BAD_REQUEST, "SHIFTS_EXIST", core.to_string())
                }
                CoreError::Unauthorized => (
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    "Unauthorized".to_string(),
                ),
            },

            // --- Storage errors ---
            AppError::Store(err) => classify_store_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// Unique violations that duplicate a service-level check map onto the same
/// domain response the check would have produced, so the race between check
/// and insert is invisible to clients. Everything else is a 500 with the
/// store's message passed through.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Duplicate { constraint } if constraint == UQ_BLOCKED_USER_DAY => (
            StatusCode::BAD_REQUEST,
            "ALREADY_BLOCKED",
            CoreError::AlreadyBlocked.to_string(),
        ),
        StoreError::Duplicate { constraint } if constraint == UQ_USERS_EMAIL => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "A user with this email already exists".to_string(),
        ),
        StoreError::Duplicate { constraint } => {
            tracing::error!(constraint = %constraint, "Unexpected unique violation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                err.to_string(),
            )
        }
        StoreError::Database(db_err) => {
            tracing::error!(error = %db_err, "Store error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                db_err.to_string(),
            )
        }
    }
}
