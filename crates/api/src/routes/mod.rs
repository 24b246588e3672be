pub mod blocked;
pub mod calendar;
pub mod health;
pub mod shifts;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                     list, create
///
/// /shifts                    create
/// /shifts/{id}               list by user (GET), update, soft-delete
///
/// /blocked                   create
/// /blocked/{id}              list by user (GET), soft-delete
///
/// /calendar/{userId}         combined shifts + blocked times (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // User management.
        .nest("/users", users::router())
        // Shift CRUD with the blocked-day rule.
        .nest("/shifts", shifts::router())
        // Blocked times (days marked unavailable).
        .nest("/blocked", blocked::router())
        // Combined calendar snapshot.
        .nest("/calendar", calendar::router())
}
