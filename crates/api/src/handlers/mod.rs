//! Request handlers, grouped by resource.
//!
//! Handlers stay thin: extract, call into [`crate::scheduling::Scheduler`],
//! shape the response. All of them except the health probe require a valid
//! bearer token via [`crate::middleware::auth::AuthToken`].

pub mod blocked;
pub mod calendar;
pub mod shifts;
pub mod users;
