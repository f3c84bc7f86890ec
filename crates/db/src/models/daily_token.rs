//! Daily token model.
//!
//! One row per `(user_id, valid_date)`. The token string is opaque and
//! globally unique; `is_used` is a one-way latch flipped by redemption.

use rollcall_core::types::{DayDate, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `daily_tokens` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyToken {
    pub id: DbId,
    pub user_id: DbId,
    pub valid_date: DayDate,
    pub token: String,
    pub is_used: bool,
    pub created_at: Timestamp,
}

/// A daily token joined with its owner, as loaded for redemption.
#[derive(Debug, Clone, FromRow)]
pub struct TokenWithPlayer {
    pub id: DbId,
    pub user_id: DbId,
    pub valid_date: DayDate,
    pub is_used: bool,
    pub player_name: String,
    pub player_email: String,
    pub team_id: DbId,
}
