//! PostgreSQL backend for [`ScheduleStore`].
//!
//! Queries are built from column-list constants and bound parameters; the
//! day-window predicates translate the half-open `[start, end)` pairs from
//! `shiftplan_core::day` into `date >= $n AND date < $m`.

use async_trait::async_trait;
use shiftplan_core::types::{EntityId, Timestamp};

use crate::error::{classify, StoreError};
use crate::models::{
    BlockedTime, CreateBlockedTime, CreateShift, CreateUser, Shift, UpdateShift, User,
};
use crate::store::ScheduleStore;
use crate::DbPool;

const USER_COLUMNS: &str = "id, name, email";

const SHIFT_COLUMNS: &str = "id, user_id, date, from_time, to_time, deleted";

const BLOCKED_COLUMNS: &str = "id, user_id, date, reason, deleted";

/// [`ScheduleStore`] over a sqlx connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleStore for PgStore {
    // ---- users ----

    async fn insert_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        let query = format!(
            "INSERT INTO users (id, name, email) \
             VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(EntityId::new_v4())
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY name");
        Ok(sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    // ---- shifts ----

    async fn insert_shift(&self, input: &CreateShift) -> Result<Shift, StoreError> {
        let query = format!(
            "INSERT INTO shifts (id, user_id, date, from_time, to_time, deleted) \
             VALUES ($1, $2, $3, $4, $5, FALSE) \
             RETURNING {SHIFT_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Shift>(&query)
            .bind(EntityId::new_v4())
            .bind(input.user_id)
            .bind(input.date)
            .bind(&input.from_time)
            .bind(&input.to_time)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn find_shift(&self, id: EntityId) -> Result<Option<Shift>, StoreError> {
        let query = format!("SELECT {SHIFT_COLUMNS} FROM shifts WHERE id = $1");
        Ok(sqlx::query_as::<_, Shift>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_shifts(&self, user_id: EntityId) -> Result<Vec<Shift>, StoreError> {
        let query = format!(
            "SELECT {SHIFT_COLUMNS} FROM shifts \
             WHERE user_id = $1 AND deleted = FALSE \
             ORDER BY date"
        );
        Ok(sqlx::query_as::<_, Shift>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn shifts_in_window(
        &self,
        user_id: EntityId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Shift>, StoreError> {
        let query = format!(
            "SELECT {SHIFT_COLUMNS} FROM shifts \
             WHERE user_id = $1 AND deleted = FALSE \
               AND date >= $2 AND date < $3 \
             ORDER BY date"
        );
        Ok(sqlx::query_as::<_, Shift>(&query)
            .bind(user_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn update_shift(
        &self,
        id: EntityId,
        input: &UpdateShift,
    ) -> Result<Option<Shift>, StoreError> {
        let query = format!(
            "UPDATE shifts \
             SET user_id = $2, date = $3, from_time = $4, to_time = $5 \
             WHERE id = $1 \
             RETURNING {SHIFT_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Shift>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(input.date)
            .bind(&input.from_time)
            .bind(&input.to_time)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn mark_shift_deleted(&self, id: EntityId) -> Result<Option<Shift>, StoreError> {
        let query = format!(
            "UPDATE shifts SET deleted = TRUE \
             WHERE id = $1 \
             RETURNING {SHIFT_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Shift>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    // ---- blocked times ----

    async fn insert_blocked_time(
        &self,
        input: &CreateBlockedTime,
    ) -> Result<BlockedTime, StoreError> {
        let query = format!(
            "INSERT INTO blocked_times (id, user_id, date, reason, deleted) \
             VALUES ($1, $2, $3, $4, FALSE) \
             RETURNING {BLOCKED_COLUMNS}"
        );
        sqlx::query_as::<_, BlockedTime>(&query)
            .bind(EntityId::new_v4())
            .bind(input.user_id)
            .bind(input.date)
            .bind(&input.reason)
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }

    async fn find_blocked_time(&self, id: EntityId) -> Result<Option<BlockedTime>, StoreError> {
        let query = format!("SELECT {BLOCKED_COLUMNS} FROM blocked_times WHERE id = $1");
        Ok(sqlx::query_as::<_, BlockedTime>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_blocked_times(&self, user_id: EntityId) -> Result<Vec<BlockedTime>, StoreError> {
        let query = format!(
            "SELECT {BLOCKED_COLUMNS} FROM blocked_times \
             WHERE user_id = $1 AND deleted = FALSE \
             ORDER BY date"
        );
        Ok(sqlx::query_as::<_, BlockedTime>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn blocked_time_in_window(
        &self,
        user_id: EntityId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Option<BlockedTime>, StoreError> {
        let query = format!(
            "SELECT {BLOCKED_COLUMNS} FROM blocked_times \
             WHERE user_id = $1 AND deleted = FALSE \
               AND date >= $2 AND date < $3 \
             LIMIT 1"
        );
        Ok(sqlx::query_as::<_, BlockedTime>(&query)
            .bind(user_id)
            .bind(start)
            .bind(end)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn mark_blocked_time_deleted(
        &self,
        id: EntityId,
    ) -> Result<Option<BlockedTime>, StoreError> {
        let query = format!(
            "UPDATE blocked_times SET deleted = TRUE \
             WHERE id = $1 \
             RETURNING {BLOCKED_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, BlockedTime>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    // ---- diagnostics ----

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
