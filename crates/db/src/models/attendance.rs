//! Attendance fact model, redemption outcomes, and aggregation payloads.

use std::collections::HashMap;

use rollcall_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::event::Event;

/// A row from the `attendance_records` table.
///
/// Created only by a successful first redemption; immutable thereafter.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub event_id: DbId,
    pub token_id: DbId,
    pub validated_by: Option<DbId>,
    pub validated_at: Timestamp,
}

/// Result of running a scanned token through the redemption state machine.
#[derive(Debug)]
pub enum RedemptionOutcome {
    /// No token row for `(token, today)`. Deliberately indistinguishable
    /// between "never existed" and "issued for another day".
    Invalid,
    /// The token was already used. Reported as a harmless duplicate, not an
    /// error, so a double-scan does not alarm the operator.
    Duplicate { player_name: String },
    /// First successful redemption: latch flipped and fact recorded.
    Redeemed {
        player_id: DbId,
        player_name: String,
        event_id: DbId,
        event_type: String,
        validated_at: Timestamp,
    },
}

/// One roster line in the per-date attendance view.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub attended: bool,
    /// Present only when `attended` is true.
    pub record: Option<AttendanceRecord>,
}

/// Per-date roster: the resolved event (if any) and every team player.
#[derive(Debug, Serialize)]
pub struct DateRoster {
    pub event: Option<Event>,
    pub players: Vec<RosterEntry>,
}

/// Month view for the attendance calendar.
///
/// `counts` has one entry per day that has an event; days without events
/// are omitted, not zero-filled.
#[derive(Debug, Serialize)]
pub struct CalendarSummary {
    pub events: Vec<Event>,
    pub counts: HashMap<String, i64>,
    pub total_players: i64,
}
