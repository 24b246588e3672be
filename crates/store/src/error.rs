/// Errors surfaced by [`ScheduleStore`](crate::ScheduleStore) backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A unique constraint rejected the write. Carries the constraint name
    /// (`uq_*`) so the API layer can map it onto the matching domain error.
    /// [`MemStore`](crate::MemStore) raises the same names as the Postgres
    /// schema so callers see one behavior regardless of backend.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    Duplicate { constraint: String },
}

/// Constraint name for the unique index on `users.email`.
pub const UQ_USERS_EMAIL: &str = "uq_users_email";

/// Constraint name for the partial unique index allowing one active block
/// per (user, day).
pub const UQ_BLOCKED_USER_DAY: &str = "uq_blocked_user_day";

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Fold unique-constraint violations into [`StoreError::Duplicate`],
/// passing everything else through as [`StoreError::Database`].
pub(crate) fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            if let Some(constraint) = db_err.constraint() {
                return StoreError::Duplicate {
                    constraint: constraint.to_string(),
                };
            }
        }
    }
    StoreError::Database(err)
}
