//! Route definitions for attendance validation and aggregation.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// POST /validate                   -> validate
/// GET  /date/{date}?team_id=       -> roster_for_date
/// GET  /calendar?team_id=&year=&month= -> calendar
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(attendance::validate))
        .route("/date/{date}", get(attendance::roster_for_date))
        .route("/calendar", get(attendance::calendar))
}
