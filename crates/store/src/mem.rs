//! In-memory backend for [`ScheduleStore`].
//!
//! Used as the startup fallback when no database is configured or reachable,
//! and as the hermetic backend for the API test suite. Matches [`PgStore`]
//! semantics exactly, including the unique-constraint names it reports, so
//! the layers above cannot tell the two apart.

use async_trait::async_trait;
use shiftplan_core::types::{EntityId, Timestamp};
use tokio::sync::RwLock;

use crate::error::{StoreError, UQ_BLOCKED_USER_DAY, UQ_USERS_EMAIL};
use crate::models::{
    BlockedTime, CreateBlockedTime, CreateShift, CreateUser, Shift, UpdateShift, User,
};
use crate::store::ScheduleStore;

/// [`ScheduleStore`] over process-local vectors. Contents vanish on restart.
#[derive(Default)]
pub struct MemStore {
    users: RwLock<Vec<User>>,
    shifts: RwLock<Vec<Shift>>,
    blocked: RwLock<Vec<BlockedTime>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleStore for MemStore {
    // ---- users ----

    async fn insert_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == input.email) {
            return Err(StoreError::Duplicate {
                constraint: UQ_USERS_EMAIL.to_string(),
            });
        }
        let user = User {
            id: EntityId::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let mut users = self.users.read().await.clone();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    // ---- shifts ----

    async fn insert_shift(&self, input: &CreateShift) -> Result<Shift, StoreError> {
        let shift = Shift {
            id: EntityId::new_v4(),
            user_id: input.user_id,
            date: input.date,
            from_time: input.from_time.clone(),
            to_time: input.to_time.clone(),
            deleted: false,
        };
        self.shifts.write().await.push(shift.clone());
        Ok(shift)
    }

    async fn find_shift(&self, id: EntityId) -> Result<Option<Shift>, StoreError> {
        Ok(self.shifts.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn list_shifts(&self, user_id: EntityId) -> Result<Vec<Shift>, StoreError> {
        let mut shifts: Vec<Shift> = self
            .shifts
            .read()
            .await
            .iter()
            .filter(|s| s.user_id == user_id && !s.deleted)
            .cloned()
            .collect();
        shifts.sort_by_key(|s| s.date);
        Ok(shifts)
    }

    async fn shifts_in_window(
        &self,
        user_id: EntityId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Shift>, StoreError> {
        let mut shifts: Vec<Shift> = self
            .shifts
            .read()
            .await
            .iter()
            .filter(|s| s.user_id == user_id && !s.deleted && s.date >= start && s.date < end)
            .cloned()
            .collect();
        shifts.sort_by_key(|s| s.date);
        Ok(shifts)
    }

    async fn update_shift(
        &self,
        id: EntityId,
        input: &UpdateShift,
    ) -> Result<Option<Shift>, StoreError> {
        let mut shifts = self.shifts.write().await;
        let Some(shift) = shifts.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        shift.user_id = input.user_id;
        shift.date = input.date;
        shift.from_time = input.from_time.clone();
        shift.to_time = input.to_time.clone();
        Ok(Some(shift.clone()))
    }

    async fn mark_shift_deleted(&self, id: EntityId) -> Result<Option<Shift>, StoreError> {
        let mut shifts = self.shifts.write().await;
        let Some(shift) = shifts.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        shift.deleted = true;
        Ok(Some(shift.clone()))
    }

    // ---- blocked times ----

    async fn insert_blocked_time(
        &self,
        input: &CreateBlockedTime,
    ) -> Result<BlockedTime, StoreError> {
        let (start, end) = shiftplan_core::day::day_bounds(input.date);
        let mut blocked = self.blocked.write().await;
        if blocked
            .iter()
            .any(|b| b.user_id == input.user_id && !b.deleted && b.date >= start && b.date < end)
        {
            return Err(StoreError::Duplicate {
                constraint: UQ_BLOCKED_USER_DAY.to_string(),
            });
        }
        let entry = BlockedTime {
            id: EntityId::new_v4(),
            user_id: input.user_id,
            date: input.date,
            reason: input.reason.clone(),
            deleted: false,
        };
        blocked.push(entry.clone());
        Ok(entry)
    }

    async fn find_blocked_time(&self, id: EntityId) -> Result<Option<BlockedTime>, StoreError> {
        Ok(self
            .blocked
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn list_blocked_times(&self, user_id: EntityId) -> Result<Vec<BlockedTime>, StoreError> {
        let mut entries: Vec<BlockedTime> = self
            .blocked
            .read()
            .await
            .iter()
            .filter(|b| b.user_id == user_id && !b.deleted)
            .cloned()
            .collect();
        entries.sort_by_key(|b| b.date);
        Ok(entries)
    }

    async fn blocked_time_in_window(
        &self,
        user_id: EntityId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Option<BlockedTime>, StoreError> {
        Ok(self
            .blocked
            .read()
            .await
            .iter()
            .find(|b| b.user_id == user_id && !b.deleted && b.date >= start && b.date < end)
            .cloned())
    }

    async fn mark_blocked_time_deleted(
        &self,
        id: EntityId,
    ) -> Result<Option<BlockedTime>, StoreError> {
        let mut blocked = self.blocked.write().await;
        let Some(entry) = blocked.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        entry.deleted = true;
        Ok(Some(entry.clone()))
    }

    // ---- diagnostics ----

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
