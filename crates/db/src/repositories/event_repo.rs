//! Repository for the `events` table.

use rollcall_core::types::{ClockTime, DayDate, DbId};
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, team_id, event_type, event_date, start_time, \
                       location, description, auto_created, created_at";

/// CRUD and find-or-create operations for team events.
pub struct EventRepo;

impl EventRepo {
    /// Insert an explicitly scheduled event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (team_id, event_type, event_date, start_time, location, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.team_id)
            .bind(&input.event_type)
            .bind(input.event_date)
            .bind(input.start_time)
            .bind(&input.location)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a team's events, newest first, optionally bounded by date.
    pub async fn list(
        pool: &PgPool,
        team_id: DbId,
        from: Option<DayDate>,
        to: Option<DayDate>,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE team_id = $1
               AND ($2::date IS NULL OR event_date >= $2)
               AND ($3::date IS NULL OR event_date <= $3)
             ORDER BY event_date DESC, start_time DESC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(team_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                event_type = COALESCE($2, event_type),
                event_date = COALESCE($3, event_date),
                start_time = COALESCE($4, start_time),
                location = COALESCE($5, location),
                description = COALESCE($6, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.event_type)
            .bind(input.event_date)
            .bind(input.start_time)
            .bind(&input.location)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find the team's event for a date, lazily creating a training event
    /// if none exists.
    ///
    /// The insert races through the partial unique index
    /// `uq_events_auto_per_day`: of N concurrent first-scans, exactly one
    /// insert lands and the rest fall through to the final select. Explicit
    /// events win over auto-created ones when both exist.
    pub async fn resolve_for_date(
        pool: &PgPool,
        team_id: DbId,
        date: DayDate,
        start_time: ClockTime,
    ) -> Result<Event, sqlx::Error> {
        if let Some(event) = Self::find_for_date(pool, team_id, date).await? {
            return Ok(event);
        }

        let insert = format!(
            "INSERT INTO events (team_id, event_type, event_date, start_time, auto_created)
             VALUES ($1, 'training', $2, $3, TRUE)
             ON CONFLICT (team_id, event_date) WHERE auto_created DO NOTHING
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Event>(&insert)
            .bind(team_id)
            .bind(date)
            .bind(start_time)
            .fetch_optional(pool)
            .await?;

        match created {
            Some(event) => Ok(event),
            // A concurrent resolver won the insert race; its row must exist.
            None => sqlx::query_as::<_, Event>(&format!(
                "SELECT {COLUMNS} FROM events
                 WHERE team_id = $1 AND event_date = $2
                 ORDER BY auto_created ASC, id ASC
                 LIMIT 1"
            ))
            .bind(team_id)
            .bind(date)
            .fetch_one(pool)
            .await,
        }
    }

    /// Find the team's event for a date without creating one.
    pub async fn find_for_date(
        pool: &PgPool,
        team_id: DbId,
        date: DayDate,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE team_id = $1 AND event_date = $2
             ORDER BY auto_created ASC, id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(team_id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }
}
