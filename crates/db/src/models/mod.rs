//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the operations that mutate the table

pub mod attendance;
pub mod daily_token;
pub mod event;
pub mod user;
