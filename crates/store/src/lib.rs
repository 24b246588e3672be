//! Storage layer for shiftplan.
//!
//! Defines the [`ScheduleStore`] trait the API server programs against, plus
//! two backends: [`PgStore`] (PostgreSQL via sqlx) and [`MemStore`] (purely
//! in-process). The server picks one at startup; tests run against
//! [`MemStore`] so the suite needs no running database.

pub mod error;
pub mod mem;
pub mod models;
pub mod pg;
pub mod store;

pub use error::StoreError;
pub use mem::MemStore;
pub use pg::PgStore;
pub use store::ScheduleStore;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations from `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
