//! The storage trait the API server programs against.

use async_trait::async_trait;
use shiftplan_core::types::{EntityId, Timestamp};

use crate::error::StoreError;
use crate::models::{
    BlockedTime, CreateBlockedTime, CreateShift, CreateUser, Shift, UpdateShift, User,
};

/// Backend-agnostic storage for users, shifts, and blocked times.
///
/// Semantics shared by every implementation:
/// - `list_*` and `*_in_window` return active rows only (`deleted = false`),
///   ordered by date.
/// - `find_*` resolves by id regardless of the deleted flag, so callers can
///   distinguish "never existed" from "soft-deleted".
/// - `update_shift` / `mark_*_deleted` return `None` when the id does not
///   resolve. Marking an already-deleted row is a no-op that still returns
///   the row.
/// - Window arguments are the half-open `[start, end)` pairs produced by
///   `shiftplan_core::day::day_bounds`.
/// - Unique violations (duplicate email, second active block on a day)
///   surface as [`StoreError::Duplicate`] with the constraint name.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    // ---- users ----

    async fn insert_user(&self, input: &CreateUser) -> Result<User, StoreError>;
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    // ---- shifts ----

    async fn insert_shift(&self, input: &CreateShift) -> Result<Shift, StoreError>;
    async fn find_shift(&self, id: EntityId) -> Result<Option<Shift>, StoreError>;
    async fn list_shifts(&self, user_id: EntityId) -> Result<Vec<Shift>, StoreError>;
    async fn shifts_in_window(
        &self,
        user_id: EntityId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Shift>, StoreError>;
    async fn update_shift(
        &self,
        id: EntityId,
        input: &UpdateShift,
    ) -> Result<Option<Shift>, StoreError>;
    async fn mark_shift_deleted(&self, id: EntityId) -> Result<Option<Shift>, StoreError>;

    // ---- blocked times ----

    async fn insert_blocked_time(
        &self,
        input: &CreateBlockedTime,
    ) -> Result<BlockedTime, StoreError>;
    async fn find_blocked_time(&self, id: EntityId) -> Result<Option<BlockedTime>, StoreError>;
    async fn list_blocked_times(&self, user_id: EntityId) -> Result<Vec<BlockedTime>, StoreError>;
    async fn blocked_time_in_window(
        &self,
        user_id: EntityId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Option<BlockedTime>, StoreError>;
    async fn mark_blocked_time_deleted(
        &self,
        id: EntityId,
    ) -> Result<Option<BlockedTime>, StoreError>;

    // ---- diagnostics ----

    /// Whether the backing storage is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
