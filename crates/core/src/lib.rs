//! Domain types shared across the rollcall workspace.
//!
//! This crate is persistence- and transport-free: no sqlx, no axum. It holds
//! the primitive aliases, the domain error type, the event-type vocabulary,
//! and opaque token generation.

pub mod error;
pub mod event_type;
pub mod token;
pub mod types;
