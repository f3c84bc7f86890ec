//! User entity model.
//!
//! Users are owned by the identity subsystem; this core consults them
//! read-only as the roster source, so there are no create/update DTOs here.

use rollcall_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// `"admin"` or `"player"`.
    pub role: String,
    pub team_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Roster-facing player representation (no role or timestamps).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub team_id: DbId,
}
