//! Client-side library for the shift planning API.
//!
//! Three layers, each usable on its own:
//!
//! - [`api`] -- the raw REST surface: the [`api::ScheduleApi`] trait and its
//!   reqwest implementation [`api::RestApi`].
//! - [`cache`] -- [`cache::ScheduleClient`], a caching wrapper over any
//!   `ScheduleApi` with the invalidation contract every mutation honours.
//! - [`calendar`] -- the pure 42-cell month grid and the [`calendar::CalendarView`]
//!   state machine that rebuilds it on navigation.
//!
//! The `shiftplan-demo` binary wires all three against a running server.

pub mod api;
pub mod cache;
pub mod calendar;
pub mod error;

pub use api::{RestApi, ScheduleApi};
pub use cache::ScheduleClient;
pub use calendar::{month_grid, CalendarDay, CalendarView};
pub use error::ClientError;
