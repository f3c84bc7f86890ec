pub mod attendance;
pub mod events;
pub mod health;
pub mod players;
pub mod qr;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /qr/daily                        get or issue today's token
/// /qr/verify/{token}               non-mutating scan preflight
///
/// /attendance/validate             redeem a scanned token (POST)
/// /attendance/date/{date}          roster for a date
/// /attendance/calendar             month summary
///
/// /events                          list, create
/// /events/today                    find-or-create today's event
/// /events/{id}                     update, delete
///
/// /players                         read-only roster list
/// /players/{id}                    read-only player fetch
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/qr", qr::router())
        .nest("/attendance", attendance::router())
        .nest("/events", events::router())
        .nest("/players", players::router())
}
