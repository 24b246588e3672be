//! Integration tests for soft-delete behaviour at the store layer.
//!
//! Exercises [`MemStore`] (which mirrors `PgStore` semantics) to verify that:
//! - Soft-deleted rows are hidden from list and window queries
//! - `find_*` by id still resolves soft-deleted rows, flag set
//! - Marking deleted is idempotent
//! - Marking an unknown id returns `None`

use chrono::{TimeZone, Utc};
use shiftplan_core::types::Timestamp;
use shiftplan_store::models::{CreateBlockedTime, CreateShift, CreateUser};
use shiftplan_store::{MemStore, ScheduleStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ts(y: i32, mo: u32, d: u32, h: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
}

async fn seed_user(store: &MemStore) -> shiftplan_store::models::User {
    store
        .insert_user(&CreateUser {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        })
        .await
        .unwrap()
}

fn shift_on(user_id: uuid::Uuid, date: Timestamp) -> CreateShift {
    CreateShift {
        user_id,
        date,
        from_time: "09:00".to_string(),
        to_time: "17:00".to_string(),
    }
}

fn block_on(user_id: uuid::Uuid, date: Timestamp) -> CreateBlockedTime {
    CreateBlockedTime {
        user_id,
        date,
        reason: Some("holiday".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Test: soft-deleted shifts are hidden from list queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleted_shift_hidden_from_list() {
    let store = MemStore::new();
    let user = seed_user(&store).await;

    let shift = store
        .insert_shift(&shift_on(user.id, ts(2024, 3, 15, 9)))
        .await
        .unwrap();

    let before = store.list_shifts(user.id).await.unwrap();
    assert_eq!(before.len(), 1, "shift should be listed before deletion");

    store.mark_shift_deleted(shift.id).await.unwrap();

    let after = store.list_shifts(user.id).await.unwrap();
    assert!(
        after.is_empty(),
        "soft-deleted shift must not appear in list"
    );
}

// ---------------------------------------------------------------------------
// Test: soft-deleted shifts are hidden from window queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleted_shift_hidden_from_window() {
    let store = MemStore::new();
    let user = seed_user(&store).await;
    let date = ts(2024, 3, 15, 14);

    let shift = store.insert_shift(&shift_on(user.id, date)).await.unwrap();
    store.mark_shift_deleted(shift.id).await.unwrap();

    let (start, end) = shiftplan_core::day::day_bounds(date);
    let in_window = store.shifts_in_window(user.id, start, end).await.unwrap();
    assert!(
        in_window.is_empty(),
        "soft-deleted shift must not count against the day window"
    );
}

// ---------------------------------------------------------------------------
// Test: find by id still resolves soft-deleted rows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_resolves_deleted_shift_with_flag() {
    let store = MemStore::new();
    let user = seed_user(&store).await;

    let shift = store
        .insert_shift(&shift_on(user.id, ts(2024, 3, 15, 9)))
        .await
        .unwrap();
    store.mark_shift_deleted(shift.id).await.unwrap();

    let found = store.find_shift(shift.id).await.unwrap();
    let found = found.expect("find_shift should resolve a soft-deleted row");
    assert!(found.deleted, "resolved row must carry deleted = true");
}

// ---------------------------------------------------------------------------
// Test: marking deleted twice is a no-op that still returns the row
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mark_deleted_is_idempotent() {
    let store = MemStore::new();
    let user = seed_user(&store).await;

    let shift = store
        .insert_shift(&shift_on(user.id, ts(2024, 3, 15, 9)))
        .await
        .unwrap();

    let first = store.mark_shift_deleted(shift.id).await.unwrap();
    assert!(first.is_some());

    let second = store.mark_shift_deleted(shift.id).await.unwrap();
    let second = second.expect("second delete should still resolve the row");
    assert!(second.deleted);
}

// ---------------------------------------------------------------------------
// Test: marking an unknown id returns None
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mark_deleted_unknown_id_returns_none() {
    let store = MemStore::new();

    let missing = store.mark_shift_deleted(uuid::Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());

    let missing = store
        .mark_blocked_time_deleted(uuid::Uuid::new_v4())
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: blocked times follow the same soft-delete pattern
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleted_block_hidden_but_findable() {
    let store = MemStore::new();
    let user = seed_user(&store).await;
    let date = ts(2024, 3, 20, 0);

    let block = store.insert_blocked_time(&block_on(user.id, date)).await.unwrap();
    store.mark_blocked_time_deleted(block.id).await.unwrap();

    assert!(store.list_blocked_times(user.id).await.unwrap().is_empty());

    let (start, end) = shiftplan_core::day::day_bounds(date);
    assert!(store
        .blocked_time_in_window(user.id, start, end)
        .await
        .unwrap()
        .is_none());

    let found = store.find_blocked_time(block.id).await.unwrap();
    assert!(found.is_some_and(|b| b.deleted));
}

// ---------------------------------------------------------------------------
// Test: unblocking a day frees it for a new block
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unblocked_day_can_be_blocked_again() {
    let store = MemStore::new();
    let user = seed_user(&store).await;
    let date = ts(2024, 3, 20, 0);

    let block = store.insert_blocked_time(&block_on(user.id, date)).await.unwrap();
    store.mark_blocked_time_deleted(block.id).await.unwrap();

    let second = store.insert_blocked_time(&block_on(user.id, date)).await;
    assert!(
        second.is_ok(),
        "a soft-deleted block must not hold the unique day slot"
    );
}
