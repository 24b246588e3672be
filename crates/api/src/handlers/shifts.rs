//! Handlers for shift CRUD.
//!
//! Deletion is soft everywhere: DELETE flips the `deleted` flag and the
//! row stays in storage. A PUT carrying `"deleted": true` takes the same
//! path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shiftplan_core::types::EntityId;
use shiftplan_store::models::{CreateShift, UpdateShift};

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthToken;
use crate::scheduling::Scheduler;
use crate::state::AppState;

/// GET /api/shifts/{userId}
///
/// List the user's active shifts, ordered by date.
pub async fn list_shifts(
    _auth: AuthToken,
    State(state): State<AppState>,
    Path(user_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let shifts = Scheduler::list_shifts(state.store.as_ref(), user_id).await?;

    Ok(Json(shifts))
}

/// POST /api/shifts
///
/// Create a shift. Rejected with `BLOCKED_DAY` when the target day carries
/// an active block for that user.
pub async fn create_shift(
    _auth: AuthToken,
    State(state): State<AppState>,
    Json(input): Json<CreateShift>,
) -> AppResult<impl IntoResponse> {
    let shift = Scheduler::create_shift(state.store.as_ref(), &input).await?;

    Ok((StatusCode::CREATED, Json(shift)))
}

/// PUT /api/shifts/{id}
///
/// Update a shift. The blocked-day rule is re-checked against the new
/// date before the row is looked up.
pub async fn update_shift(
    _auth: AuthToken,
    State(state): State<AppState>,
    Path(shift_id): Path<EntityId>,
    Json(input): Json<UpdateShift>,
) -> AppResult<impl IntoResponse> {
    let shift = Scheduler::update_shift(state.store.as_ref(), shift_id, &input).await?;

    Ok(Json(shift))
}

/// DELETE /api/shifts/{id}
///
/// Soft-delete a shift and return the updated row.
pub async fn delete_shift(
    _auth: AuthToken,
    State(state): State<AppState>,
    Path(shift_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let shift = Scheduler::soft_delete_shift(state.store.as_ref(), shift_id).await?;

    Ok(Json(json!({
        "message": "Shift soft deleted",
        "shift": shift,
    })))
}
