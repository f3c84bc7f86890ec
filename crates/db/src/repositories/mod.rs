//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every find-or-create and every
//! state transition is expressed as a single atomic statement (`ON CONFLICT`
//! arbitration or a conditional `UPDATE` checked via `rows_affected`), never
//! as a check-then-act sequence.

pub mod attendance_repo;
pub mod event_repo;
pub mod token_repo;
pub mod user_repo;

pub use attendance_repo::AttendanceRepo;
pub use event_repo::EventRepo;
pub use token_repo::TokenRepo;
pub use user_repo::UserRepo;
