//! Route definitions for blocked times.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::blocked;
use crate::state::AppState;

/// Blocked-time routes mounted at `/blocked`.
///
/// ```text
/// POST   /       -> create_blocked_time
/// GET    /{id}   -> list_blocked_times (the segment is a *user* id)
/// DELETE /{id}   -> delete_blocked_time
/// ```
///
/// Same shape as the shift routes: GET is keyed by user, DELETE by row.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(blocked::create_blocked_time))
        .route(
            "/{id}",
            get(blocked::list_blocked_times).delete(blocked::delete_blocked_time),
        )
}
