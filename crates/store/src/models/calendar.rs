//! Calendar snapshot aggregate (computed, not a DB row).

use serde::{Deserialize, Serialize};

use super::{BlockedTime, Shift};

/// Everything the calendar needs for one user in a single response:
/// the active (non-deleted) shifts and blocked times.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSnapshot {
    pub shifts: Vec<Shift>,
    pub blocked_times: Vec<BlockedTime>,
}
