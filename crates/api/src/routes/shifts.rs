//! Route definitions for shifts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::shifts;
use crate::state::AppState;

/// Shift routes mounted at `/shifts`.
///
/// ```text
/// POST   /       -> create_shift
/// GET    /{id}   -> list_shifts (the segment is a *user* id)
/// PUT    /{id}   -> update_shift
/// DELETE /{id}   -> delete_shift
/// ```
///
/// The collection is keyed by user, so GET reads its path segment as a
/// user id while PUT and DELETE read theirs as a shift id. All three hang
/// off one route because the matcher rejects two parameter names at the
/// same position.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(shifts::create_shift))
        .route(
            "/{id}",
            get(shifts::list_shifts)
                .put(shifts::update_shift)
                .delete(shifts::delete_shift),
        )
}
