//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` + `Deserialize` entity struct matching the
//!   database row (also parsed by the client crate from API responses)
//! - Create/update DTOs for the write endpoints
//!
//! Wire field names are camelCase (`userId`, `fromTime`) to match the REST
//! surface; database columns stay snake_case.

pub mod blocked_time;
pub mod calendar;
pub mod shift;
pub mod user;

pub use blocked_time::{BlockedTime, CreateBlockedTime};
pub use calendar::CalendarSnapshot;
pub use shift::{CreateShift, Shift, UpdateShift};
pub use user::{CreateUser, User};
