//! Shared fixtures for repository integration tests.
//!
//! Users are owned by the external identity subsystem, so tests seed them
//! with raw inserts rather than through a repository.

use chrono::NaiveDate;
use rollcall_core::types::DbId;
use sqlx::PgPool;

/// Insert a player and return its id.
pub async fn seed_player(pool: &PgPool, name: &str, email: &str, team_id: DbId) -> DbId {
    seed_user(pool, name, email, "player", team_id).await
}

/// Insert a user with an explicit role and return its id.
pub async fn seed_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    role: &str,
    team_id: DbId,
) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO users (name, email, role, team_id)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(role)
    .bind(team_id)
    .fetch_one(pool)
    .await
    .expect("seed user");
    row.0
}

/// A fixed calendar date used where tests need deterministic "today".
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

/// A fixed wall-clock time used for auto-created events.
pub fn fixed_time() -> chrono::NaiveTime {
    chrono::NaiveTime::from_hms_opt(18, 0, 0).expect("valid time")
}

/// Count the attendance facts recorded for a token.
pub async fn attendance_count_for_token(pool: &PgPool, token_id: DbId) -> i64 {
    let row: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM attendance_records WHERE token_id = $1")
            .bind(token_id)
            .fetch_one(pool)
            .await
            .expect("count attendance");
    row.0
}

/// Count a team's events on a date.
pub async fn event_count_for_date(pool: &PgPool, team_id: DbId, date: NaiveDate) -> i64 {
    let row: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM events WHERE team_id = $1 AND event_date = $2")
            .bind(team_id)
            .bind(date)
            .fetch_one(pool)
            .await
            .expect("count events");
    row.0
}
