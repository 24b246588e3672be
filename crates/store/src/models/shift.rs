//! Shift entity model and DTOs.

use serde::{Deserialize, Serialize};
use shiftplan_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `shifts` table.
///
/// `date` places the shift on a calendar day; clients may send it with
/// arbitrary time-of-day noise, so every day comparison normalizes through
/// `shiftplan_core::day`. `from_time`/`to_time` are wall-clock `HH:MM`
/// strings, stored as sent.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: EntityId,
    pub user_id: EntityId,
    pub date: Timestamp,
    pub from_time: String,
    pub to_time: String,
    pub deleted: bool,
}

/// DTO for creating a shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShift {
    pub user_id: EntityId,
    pub date: Timestamp,
    pub from_time: String,
    pub to_time: String,
}

/// DTO for updating a shift.
///
/// `deleted: true` soft-deletes through the update endpoint; it shares the
/// delete endpoint's code path rather than writing the flag directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShift {
    pub user_id: EntityId,
    pub date: Timestamp,
    pub from_time: String,
    pub to_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}
