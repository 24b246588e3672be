//! Shiftplan API server library.
//!
//! Exposes the building blocks (config, state, error handling, scheduling
//! rules, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod scheduling;
pub mod state;
