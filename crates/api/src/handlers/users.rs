//! Handlers for user management.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use shiftplan_store::models::CreateUser;

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthToken;
use crate::scheduling::Scheduler;
use crate::state::AppState;

/// POST /api/users
///
/// Create a user. Name and email are required; the email must be unique.
pub async fn create_user(
    _auth: AuthToken,
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = Scheduler::create_user(state.store.as_ref(), &input).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users
///
/// List all users, ordered by name.
pub async fn list_users(
    _auth: AuthToken,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = Scheduler::list_users(state.store.as_ref()).await?;

    Ok(Json(users))
}
