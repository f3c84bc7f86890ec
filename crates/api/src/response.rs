//! Shared response envelope types for API handlers.
//!
//! Entity-shaped responses use a `{ "data": ... }` envelope. The redemption
//! and verification endpoints return bespoke state-machine payloads instead
//! (see `handlers::attendance` and `handlers::qr`) because their consumers
//! branch on `success` / `valid` rather than unwrap an entity.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
