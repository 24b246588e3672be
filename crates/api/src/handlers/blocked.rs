//! Handlers for blocked times (days marked unavailable).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shiftplan_core::types::EntityId;
use shiftplan_store::models::CreateBlockedTime;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthToken;
use crate::scheduling::Scheduler;
use crate::state::AppState;

/// GET /api/blocked/{userId}
///
/// List the user's active blocked times, ordered by date.
pub async fn list_blocked_times(
    _auth: AuthToken,
    State(state): State<AppState>,
    Path(user_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let entries = Scheduler::list_blocked_times(state.store.as_ref(), user_id).await?;

    Ok(Json(entries))
}

/// POST /api/blocked
///
/// Block a day for a user. Rejected with `ALREADY_BLOCKED` when an active
/// block exists for that day, and with `SHIFTS_EXIST` when the day still
/// carries active shifts.
pub async fn create_blocked_time(
    _auth: AuthToken,
    State(state): State<AppState>,
    Json(input): Json<CreateBlockedTime>,
) -> AppResult<impl IntoResponse> {
    let entry = Scheduler::create_blocked_time(state.store.as_ref(), &input).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /api/blocked/{id}
///
/// Soft-delete a blocked time (unblock the day) and return the updated row.
pub async fn delete_blocked_time(
    _auth: AuthToken,
    State(state): State<AppState>,
    Path(blocked_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let entry = Scheduler::soft_delete_blocked_time(state.store.as_ref(), blocked_id).await?;

    Ok(Json(json!({
        "message": "Blocked day soft deleted",
        "blockedTime": entry,
    })))
}
