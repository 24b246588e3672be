//! Scheduling rules over the storage layer.
//!
//! Every write path that touches the shift/block mutual-exclusion rule goes
//! through here, and all of them resolve "the same day" through the one
//! window predicate in `shiftplan_core::day`:
//!
//! - a shift cannot be created or moved onto a day with an active block
//! - a day with active shifts cannot be blocked
//! - a day can carry at most one active block
//!
//! Soft deletion is a single capability with two HTTP entry points (the
//! DELETE endpoints and `PUT` with `deleted: true`); both land on the same
//! method here. Checks read the store and then write without holding a
//! lock across the pair; the blocked-day unique index backstops the one
//! axis where a lost race would corrupt the invariant.

use shiftplan_core::day::{day_bounds, validate_time};
use shiftplan_core::error::CoreError;
use shiftplan_core::types::{EntityId, Timestamp};
use shiftplan_store::models::{
    BlockedTime, CalendarSnapshot, CreateBlockedTime, CreateShift, CreateUser, Shift, UpdateShift,
    User,
};
use shiftplan_store::ScheduleStore;

use crate::error::AppResult;

/// Domain operations for users, shifts, and blocked times.
///
/// Stateless; every method takes the active [`ScheduleStore`] the way
/// repository methods take a pool.
pub struct Scheduler;

impl Scheduler {
    // ---- users ----

    pub async fn create_user(store: &dyn ScheduleStore, input: &CreateUser) -> AppResult<User> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("name is required".into()).into());
        }
        if input.email.trim().is_empty() {
            return Err(CoreError::Validation("email is required".into()).into());
        }

        let user = store.insert_user(input).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    pub async fn list_users(store: &dyn ScheduleStore) -> AppResult<Vec<User>> {
        Ok(store.list_users().await?)
    }

    // ---- shifts ----

    /// Create a shift, rejecting days that carry an active block.
    pub async fn create_shift(store: &dyn ScheduleStore, input: &CreateShift) -> AppResult<Shift> {
        validate_time("fromTime", &input.from_time)?;
        validate_time("toTime", &input.to_time)?;

        Self::ensure_day_not_blocked(store, input.user_id, input.date, "add").await?;

        let shift = store.insert_shift(input).await?;
        tracing::info!(shift_id = %shift.id, user_id = %shift.user_id, "Shift created");
        Ok(shift)
    }

    pub async fn list_shifts(store: &dyn ScheduleStore, user_id: EntityId) -> AppResult<Vec<Shift>> {
        Ok(store.list_shifts(user_id).await?)
    }

    /// Update a shift's fields, re-checking the blocked-day rule against the
    /// new date. `deleted: true` in the input soft-deletes instead.
    ///
    /// `deleted: false` does not resurrect: the flag is one-way, so updates
    /// never write it.
    pub async fn update_shift(
        store: &dyn ScheduleStore,
        id: EntityId,
        input: &UpdateShift,
    ) -> AppResult<Shift> {
        if input.deleted == Some(true) {
            return Self::soft_delete_shift(store, id).await;
        }

        validate_time("fromTime", &input.from_time)?;
        validate_time("toTime", &input.to_time)?;

        Self::ensure_day_not_blocked(store, input.user_id, input.date, "update").await?;

        let Some(shift) = store.update_shift(id, input).await? else {
            return Err(CoreError::NotFound { entity: "Shift" }.into());
        };
        tracing::info!(shift_id = %shift.id, "Shift updated");
        Ok(shift)
    }

    /// Flip the deleted flag. Idempotent: deleting an already-deleted shift
    /// succeeds and returns the row unchanged.
    pub async fn soft_delete_shift(store: &dyn ScheduleStore, id: EntityId) -> AppResult<Shift> {
        let Some(shift) = store.mark_shift_deleted(id).await? else {
            return Err(CoreError::NotFound { entity: "Shift" }.into());
        };
        tracing::info!(shift_id = %shift.id, "Shift soft deleted");
        Ok(shift)
    }

    // ---- blocked times ----

    /// Block a day. Rejected while the day already carries an active block
    /// (checked first) or any active shift.
    pub async fn create_blocked_time(
        store: &dyn ScheduleStore,
        input: &CreateBlockedTime,
    ) -> AppResult<BlockedTime> {
        let (start, end) = day_bounds(input.date);

        if store
            .blocked_time_in_window(input.user_id, start, end)
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyBlocked.into());
        }

        let shifts = store.shifts_in_window(input.user_id, start, end).await?;
        if !shifts.is_empty() {
            return Err(CoreError::ShiftsExist.into());
        }

        let entry = store.insert_blocked_time(input).await?;
        tracing::info!(blocked_id = %entry.id, user_id = %entry.user_id, "Day blocked");
        Ok(entry)
    }

    pub async fn list_blocked_times(
        store: &dyn ScheduleStore,
        user_id: EntityId,
    ) -> AppResult<Vec<BlockedTime>> {
        Ok(store.list_blocked_times(user_id).await?)
    }

    /// Unblock: flip the deleted flag on a blocked time. Idempotent.
    pub async fn soft_delete_blocked_time(
        store: &dyn ScheduleStore,
        id: EntityId,
    ) -> AppResult<BlockedTime> {
        let Some(entry) = store.mark_blocked_time_deleted(id).await? else {
            return Err(CoreError::NotFound {
                entity: "Blocked time",
            }
            .into());
        };
        tracing::info!(blocked_id = %entry.id, "Day unblocked");
        Ok(entry)
    }

    // ---- calendar ----

    /// Both active lists for one user in a single response.
    pub async fn calendar_snapshot(
        store: &dyn ScheduleStore,
        user_id: EntityId,
    ) -> AppResult<CalendarSnapshot> {
        let shifts = store.list_shifts(user_id).await?;
        let blocked_times = store.list_blocked_times(user_id).await?;
        Ok(CalendarSnapshot {
            shifts,
            blocked_times,
        })
    }

    // ---- shared checks ----

    /// The single blocked-day gate used by shift create and update.
    async fn ensure_day_not_blocked(
        store: &dyn ScheduleStore,
        user_id: EntityId,
        date: Timestamp,
        action: &'static str,
    ) -> AppResult<()> {
        let (start, end) = day_bounds(date);
        if store
            .blocked_time_in_window(user_id, start, end)
            .await?
            .is_some()
        {
            return Err(CoreError::BlockedDay { action }.into());
        }
        Ok(())
    }
}
