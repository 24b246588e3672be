//! Handler for the combined calendar snapshot.

use axum::extract::{Path, State};
use axum::response::IntoResponse;

use shiftplan_core::types::EntityId;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthToken;
use crate::scheduling::Scheduler;
use crate::state::AppState;

/// GET /api/calendar/{userId}
///
/// Active shifts and blocked times for one user in a single payload, so
/// clients can paint a calendar with one request.
pub async fn get_calendar(
    _auth: AuthToken,
    State(state): State<AppState>,
    Path(user_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let snapshot = Scheduler::calendar_snapshot(state.store.as_ref(), user_id).await?;

    Ok(Json(snapshot))
}
