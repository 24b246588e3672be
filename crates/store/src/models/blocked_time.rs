//! Blocked-time entity model and DTO.

use serde::{Deserialize, Serialize};
use shiftplan_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `blocked_times` table.
///
/// Marks one calendar day unavailable for one user. At most one active
/// block may exist per (user, day).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedTime {
    pub id: EntityId,
    pub user_id: EntityId,
    pub date: Timestamp,
    pub reason: Option<String>,
    pub deleted: bool,
}

/// DTO for blocking a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockedTime {
    pub user_id: EntityId,
    pub date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
