/// All entity primary keys are UUIDv4, generated by the application at
/// insert time so the in-memory and Postgres backends agree on id shape.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
