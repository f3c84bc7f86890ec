//! Shared query parameter types for API handlers.

use rollcall_core::types::DbId;
use serde::Deserialize;

/// Query parameters for team-scoped reads (`?team_id=`).
///
/// `team_id` is required everywhere the core is team-scoped: there is no
/// implicit default team.
#[derive(Debug, Deserialize)]
pub struct TeamParams {
    pub team_id: DbId,
}
