//! Event entity model and DTOs.

use rollcall_core::types::{ClockTime, DayDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub team_id: DbId,
    /// `"training"` or `"match"` (validated via `rollcall_core::event_type`).
    pub event_type: String,
    pub event_date: DayDate,
    pub start_time: ClockTime,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Whether this event was materialized lazily by a redemption.
    pub auto_created: bool,
    pub created_at: Timestamp,
}

/// DTO for creating an explicit event.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub team_id: DbId,
    pub event_type: String,
    pub event_date: DayDate,
    pub start_time: ClockTime,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating an event. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateEvent {
    pub event_type: Option<String>,
    pub event_date: Option<DayDate>,
    pub start_time: Option<ClockTime>,
    pub location: Option<String>,
    pub description: Option<String>,
}
