//! Route definitions for team events.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /?team_id=&from=&to=  -> list
/// POST   /                     -> create
/// GET    /today?team_id=       -> today (find-or-create)
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list).post(events::create))
        .route("/today", get(events::today))
        .route("/{id}", axum::routing::put(events::update).delete(events::delete))
}
