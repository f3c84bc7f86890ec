//! Route definitions for daily QR tokens.

use axum::routing::get;
use axum::Router;

use crate::handlers::qr;
use crate::state::AppState;

/// Routes mounted at `/qr`.
///
/// ```text
/// GET /daily?user_id=       -> get_daily
/// GET /verify/{token}       -> verify
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/daily", get(qr::get_daily))
        .route("/verify/{token}", get(qr::verify))
}
