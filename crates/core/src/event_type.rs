//! Event type vocabulary.

use crate::error::CoreError;

/// The kind of team activity an event represents.
///
/// Stored as lowercase text in the `events.event_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Training,
    Match,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Training => "training",
            EventType::Match => "match",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "training" => Ok(EventType::Training),
            "match" => Ok(EventType::Match),
            _ => Err(CoreError::Validation(format!(
                "Invalid event type '{s}', expected 'training' or 'match'"
            ))),
        }
    }
}
