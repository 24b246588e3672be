//! Caching wrapper over a [`ScheduleApi`].
//!
//! [`ScheduleClient`] keeps one cache slot for the users list and per-user
//! maps for shifts, blocked times, and calendar snapshots. Getters serve
//! from cache unless asked to refresh; every mutation invalidates the
//! affected user's entries for the mutated resource AND the calendar
//! snapshot, because the snapshot aggregates both lists. Fetch errors
//! propagate unchanged and never populate a slot.
//!
//! There is no TTL and no coalescing of duplicate in-flight fetches;
//! concurrent fetches for one key are last-write-wins.

use std::collections::HashMap;

use chrono::{Duration, NaiveTime, Weekday};
use tokio::sync::RwLock;

use shiftplan_core::day::{same_day, validate_time};
use shiftplan_core::types::{EntityId, Timestamp};
use shiftplan_store::models::{
    BlockedTime, CalendarSnapshot, CreateBlockedTime, CreateShift, CreateUser, Shift, UpdateShift,
    User,
};

use crate::api::ScheduleApi;
use crate::error::ClientError;

/// Identity adopted when the server has no users yet.
pub const DEFAULT_USER_NAME: &str = "Demo User";
pub const DEFAULT_USER_EMAIL: &str = "demo@shiftplan.dev";

/// Outcome of [`ScheduleClient::create_shifts_for_week`].
#[derive(Debug, Default)]
pub struct WeekPlan {
    /// Shifts created, in weekday order.
    pub created: Vec<Shift>,
    /// Days skipped because they were blocked.
    pub skipped: Vec<Timestamp>,
}

/// Caching client over any [`ScheduleApi`] implementation.
pub struct ScheduleClient<A> {
    api: A,
    users: RwLock<Option<Vec<User>>>,
    shifts: RwLock<HashMap<EntityId, Vec<Shift>>>,
    blocked: RwLock<HashMap<EntityId, Vec<BlockedTime>>>,
    calendars: RwLock<HashMap<EntityId, CalendarSnapshot>>,
}

impl<A: ScheduleApi> ScheduleClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            users: RwLock::new(None),
            shifts: RwLock::new(HashMap::new()),
            blocked: RwLock::new(HashMap::new()),
            calendars: RwLock::new(HashMap::new()),
        }
    }

    /// The wrapped API, for callers that need to bypass the cache.
    pub fn api(&self) -> &A {
        &self.api
    }

    // ---- cached reads ----

    /// All users. `force_refresh` skips the cache but still updates it.
    pub async fn users(&self, force_refresh: bool) -> Result<Vec<User>, ClientError> {
        if !force_refresh {
            if let Some(users) = self.users.read().await.as_ref() {
                return Ok(users.clone());
            }
        }

        let users = self.api.list_users().await?;
        *self.users.write().await = Some(users.clone());
        Ok(users)
    }

    /// The user's active shifts.
    pub async fn shifts(
        &self,
        user_id: EntityId,
        force_refresh: bool,
    ) -> Result<Vec<Shift>, ClientError> {
        if !force_refresh {
            if let Some(shifts) = self.shifts.read().await.get(&user_id) {
                return Ok(shifts.clone());
            }
        }

        let shifts = self.api.list_shifts(user_id).await?;
        self.shifts.write().await.insert(user_id, shifts.clone());
        Ok(shifts)
    }

    /// The user's active blocked times.
    pub async fn blocked_times(
        &self,
        user_id: EntityId,
        force_refresh: bool,
    ) -> Result<Vec<BlockedTime>, ClientError> {
        if !force_refresh {
            if let Some(entries) = self.blocked.read().await.get(&user_id) {
                return Ok(entries.clone());
            }
        }

        let entries = self.api.list_blocked_times(user_id).await?;
        self.blocked.write().await.insert(user_id, entries.clone());
        Ok(entries)
    }

    /// Both active lists in one payload, as the calendar endpoint returns them.
    pub async fn calendar(
        &self,
        user_id: EntityId,
        force_refresh: bool,
    ) -> Result<CalendarSnapshot, ClientError> {
        if !force_refresh {
            if let Some(snapshot) = self.calendars.read().await.get(&user_id) {
                return Ok(snapshot.clone());
            }
        }

        let snapshot = self.api.calendar(user_id).await?;
        self.calendars
            .write()
            .await
            .insert(user_id, snapshot.clone());
        Ok(snapshot)
    }

    // ---- mutations ----

    pub async fn create_user(&self, input: &CreateUser) -> Result<User, ClientError> {
        let user = self.api.create_user(input).await?;
        self.invalidate_users().await;
        Ok(user)
    }

    pub async fn create_shift(&self, input: &CreateShift) -> Result<Shift, ClientError> {
        let shift = self.api.create_shift(input).await?;
        self.invalidate_shifts(shift.user_id).await;
        Ok(shift)
    }

    pub async fn update_shift(
        &self,
        id: EntityId,
        input: &UpdateShift,
    ) -> Result<Shift, ClientError> {
        let shift = self.api.update_shift(id, input).await?;
        self.invalidate_shifts(shift.user_id).await;
        Ok(shift)
    }

    pub async fn delete_shift(&self, id: EntityId) -> Result<Shift, ClientError> {
        let shift = self.api.delete_shift(id).await?;
        self.invalidate_shifts(shift.user_id).await;
        Ok(shift)
    }

    pub async fn create_blocked_time(
        &self,
        input: &CreateBlockedTime,
    ) -> Result<BlockedTime, ClientError> {
        let entry = self.api.create_blocked_time(input).await?;
        self.invalidate_blocked(entry.user_id).await;
        Ok(entry)
    }

    pub async fn delete_blocked_time(&self, id: EntityId) -> Result<BlockedTime, ClientError> {
        let entry = self.api.delete_blocked_time(id).await?;
        self.invalidate_blocked(entry.user_id).await;
        Ok(entry)
    }

    // ---- conveniences ----

    /// Adopt the first existing user, or provision the demo identity.
    pub async fn ensure_default_user(&self) -> Result<User, ClientError> {
        let users = self.users(false).await?;
        if let Some(user) = users.into_iter().next() {
            return Ok(user);
        }

        tracing::info!("No users found; creating the default user");
        self.create_user(&CreateUser {
            name: DEFAULT_USER_NAME.to_string(),
            email: DEFAULT_USER_EMAIL.to_string(),
        })
        .await
    }

    /// Create a Monday-to-Friday run of identical shifts in the week
    /// containing `date`, skipping days that are blocked.
    ///
    /// Times are validated up front so a typo cannot create a partial
    /// week. The blocked list is consulted first (cached is fine); a day
    /// the server still rejects with `BLOCKED_DAY` counts as skipped
    /// rather than failing the whole run, since that only means the local
    /// list was stale. Other errors abort and leave earlier creations
    /// standing.
    pub async fn create_shifts_for_week(
        &self,
        user_id: EntityId,
        date: Timestamp,
        from_time: &str,
        to_time: &str,
    ) -> Result<WeekPlan, ClientError> {
        validate_time("fromTime", from_time)?;
        validate_time("toTime", to_time)?;

        let blocked = self.blocked_times(user_id, false).await?;
        let monday = week_monday(date);

        let mut plan = WeekPlan::default();
        for offset in 0..5 {
            let day = monday + Duration::days(offset);

            if blocked.iter().any(|b| same_day(b.date, day)) {
                plan.skipped.push(day);
                continue;
            }

            let input = CreateShift {
                user_id,
                date: day,
                from_time: from_time.to_string(),
                to_time: to_time.to_string(),
            };
            match self.create_shift(&input).await {
                Ok(shift) => plan.created.push(shift),
                Err(err) if err.is_code("BLOCKED_DAY") => plan.skipped.push(day),
                Err(err) => return Err(err),
            }
        }

        tracing::info!(
            user_id = %user_id,
            created = plan.created.len(),
            skipped = plan.skipped.len(),
            "Week planned"
        );
        Ok(plan)
    }

    // ---- invalidation ----

    async fn invalidate_users(&self) {
        *self.users.write().await = None;
        tracing::debug!("Users cache invalidated");
    }

    async fn invalidate_shifts(&self, user_id: EntityId) {
        self.shifts.write().await.remove(&user_id);
        self.calendars.write().await.remove(&user_id);
        tracing::debug!(%user_id, "Shift and calendar caches invalidated");
    }

    async fn invalidate_blocked(&self, user_id: EntityId) {
        self.blocked.write().await.remove(&user_id);
        self.calendars.write().await.remove(&user_id);
        tracing::debug!(%user_id, "Blocked-time and calendar caches invalidated");
    }
}

/// Midnight UTC of the Monday in the week containing `date`.
fn week_monday(date: Timestamp) -> Timestamp {
    date.date_naive()
        .week(Weekday::Mon)
        .first_day()
        .and_time(NaiveTime::MIN)
        .and_utc()
}
