//! User entity model and DTO.

use serde::{Deserialize, Serialize};
use shiftplan_core::types::EntityId;
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

/// DTO for creating a new user. Email must be unique (enforced by the store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}
