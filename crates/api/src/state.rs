use std::sync::Arc;

use shiftplan_store::ScheduleStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Active storage backend, chosen at startup (Postgres or in-memory).
    pub store: Arc<dyn ScheduleStore>,
    /// Server configuration (the auth extractor reads the API token here).
    pub config: Arc<ServerConfig>,
}
