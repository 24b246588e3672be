//! Domain primitives shared by every shiftplan crate.
//!
//! Keeps zero internal dependencies so the store, API, and client crates can
//! all build on the same id/time aliases, error taxonomy, and day-window
//! arithmetic without pulling in each other.

pub mod day;
pub mod error;
pub mod types;
