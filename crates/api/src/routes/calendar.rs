//! Route definition for the calendar snapshot.

use axum::routing::get;
use axum::Router;

use crate::handlers::calendar;
use crate::state::AppState;

/// Calendar routes mounted at `/calendar`.
///
/// ```text
/// GET    /{userId}   -> get_calendar
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{user_id}", get(calendar::get_calendar))
}
