//! Repository for the `attendance_records` table and the redemption
//! state machine.

use std::collections::HashMap;

use rollcall_core::types::{ClockTime, DayDate, DbId};
use sqlx::PgPool;

use crate::models::attendance::{
    AttendanceRecord, CalendarSummary, DateRoster, RedemptionOutcome, RosterEntry,
};
use crate::repositories::{EventRepo, TokenRepo, UserRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, event_id, token_id, validated_by, validated_at";

/// Redemption (write side) and attendance aggregation (read side).
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Run a scanned token through the redemption state machine.
    ///
    /// Token states per `(user, date)`:
    /// - no row for `(token, today)`        -> [`RedemptionOutcome::Invalid`]
    /// - row exists, `is_used`              -> [`RedemptionOutcome::Duplicate`]
    /// - row exists, unused                 -> flip the latch, record the fact
    ///
    /// The unused->used transition and the fact insert run in one
    /// transaction, with the transition expressed as a conditional `UPDATE`
    /// checked via `rows_affected`. Two concurrent redemptions of one token
    /// therefore serialize on the row: the loser sees zero rows affected,
    /// rolls back, and reports a duplicate. No path yields two facts.
    pub async fn redeem(
        pool: &PgPool,
        token: &str,
        today: DayDate,
        now: ClockTime,
        validated_by: Option<DbId>,
    ) -> Result<RedemptionOutcome, sqlx::Error> {
        let Some(scanned) = TokenRepo::find_for_redemption(pool, token, today).await? else {
            return Ok(RedemptionOutcome::Invalid);
        };

        if scanned.is_used {
            return Ok(RedemptionOutcome::Duplicate {
                player_name: scanned.player_name,
            });
        }

        // Resolving the event before the transaction is safe: resolution is
        // idempotent (ON CONFLICT arbitrated) and an auto-created event is
        // never rolled back, matching explicit operator creation.
        let event = EventRepo::resolve_for_date(pool, scanned.team_id, today, now).await?;

        let mut tx = pool.begin().await?;

        let flipped = sqlx::query(
            "UPDATE daily_tokens SET is_used = TRUE WHERE id = $1 AND is_used = FALSE",
        )
        .bind(scanned.id)
        .execute(&mut *tx)
        .await?;

        if flipped.rows_affected() == 0 {
            // A concurrent redemption won between our read and this write.
            tracing::debug!(token_id = scanned.id, "Lost redemption race, reporting duplicate");
            tx.rollback().await?;
            return Ok(RedemptionOutcome::Duplicate {
                player_name: scanned.player_name,
            });
        }

        let insert = format!(
            "INSERT INTO attendance_records (user_id, event_id, token_id, validated_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, AttendanceRecord>(&insert)
            .bind(scanned.user_id)
            .bind(event.id)
            .bind(scanned.id)
            .bind(validated_by)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(RedemptionOutcome::Redeemed {
            player_id: scanned.user_id,
            player_name: scanned.player_name,
            event_id: event.id,
            event_type: event.event_type,
            validated_at: record.validated_at,
        })
    }

    /// Left-join the team roster against the attendance facts of a date.
    ///
    /// Players with no fact for that date's event appear with
    /// `attended = false`. Pure read, safe under arbitrary concurrency.
    pub async fn roster_for_date(
        pool: &PgPool,
        team_id: DbId,
        date: DayDate,
    ) -> Result<DateRoster, sqlx::Error> {
        let event = EventRepo::find_for_date(pool, team_id, date).await?;
        let players = UserRepo::list_players(pool, team_id).await?;

        let records = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT a.id, a.user_id, a.event_id, a.token_id, a.validated_by, a.validated_at
             FROM attendance_records a
             JOIN events e ON e.id = a.event_id
             WHERE e.team_id = $1 AND e.event_date = $2",
        )
        .bind(team_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        let mut by_user: HashMap<DbId, AttendanceRecord> =
            records.into_iter().map(|r| (r.user_id, r)).collect();

        let players = players
            .into_iter()
            .map(|p| {
                let record = by_user.remove(&p.id);
                RosterEntry {
                    id: p.id,
                    name: p.name,
                    email: p.email,
                    attended: record.is_some(),
                    record,
                }
            })
            .collect();

        Ok(DateRoster { event, players })
    }

    /// Build the month view: events, per-date attendance counts, and team
    /// size.
    ///
    /// `counts` covers `[first-of-month, first-of-next-month)` and contains
    /// one entry per day that has an event (zero included); days without
    /// events are omitted. Pure read.
    pub async fn calendar_summary(
        pool: &PgPool,
        team_id: DbId,
        start: DayDate,
        end: DayDate,
    ) -> Result<CalendarSummary, sqlx::Error> {
        let events = EventRepo::list(pool, team_id, Some(start), end.pred_opt()).await?;

        let rows: Vec<(DayDate, i64)> = sqlx::query_as(
            "SELECT e.event_date, COUNT(a.id)
             FROM events e
             LEFT JOIN attendance_records a ON a.event_id = e.id
             WHERE e.team_id = $1 AND e.event_date >= $2 AND e.event_date < $3
             GROUP BY e.event_date",
        )
        .bind(team_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        let counts = rows
            .into_iter()
            .map(|(date, count)| (date.to_string(), count))
            .collect();

        let total_players = UserRepo::count_players(pool, team_id).await?;

        Ok(CalendarSummary {
            events,
            counts,
            total_players,
        })
    }
}
