//! Repository for the `daily_tokens` table.

use rollcall_core::types::{DayDate, DbId};
use sqlx::PgPool;

use crate::models::daily_token::{DailyToken, TokenWithPlayer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, valid_date, token, is_used, created_at";

/// Issuance and lookup of per-user, per-day tokens.
pub struct TokenRepo;

impl TokenRepo {
    /// Return the user's token for `today`, creating it exactly once.
    ///
    /// The insert is arbitrated by `uq_daily_tokens_user_date`: when two
    /// issuance requests race, one insert lands and the other observes the
    /// winner's row via the fallback select. There is no separate existence
    /// check before the insert.
    pub async fn get_or_issue(
        pool: &PgPool,
        user_id: DbId,
        today: DayDate,
    ) -> Result<DailyToken, sqlx::Error> {
        let insert = format!(
            "INSERT INTO daily_tokens (user_id, valid_date, token)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, valid_date) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, DailyToken>(&insert)
            .bind(user_id)
            .bind(today)
            .bind(rollcall_core::token::generate())
            .fetch_optional(pool)
            .await?;

        match created {
            Some(token) => Ok(token),
            None => {
                let select =
                    format!("SELECT {COLUMNS} FROM daily_tokens WHERE user_id = $1 AND valid_date = $2");
                sqlx::query_as::<_, DailyToken>(&select)
                    .bind(user_id)
                    .bind(today)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Look up a scanned token for redemption, joined with its owner.
    ///
    /// Matches only tokens issued for `today`; a token from any other day is
    /// indistinguishable from one that never existed.
    pub async fn find_for_redemption(
        pool: &PgPool,
        token: &str,
        today: DayDate,
    ) -> Result<Option<TokenWithPlayer>, sqlx::Error> {
        sqlx::query_as::<_, TokenWithPlayer>(
            "SELECT t.id, t.user_id, t.valid_date, t.is_used,
                    u.name AS player_name, u.email AS player_email, u.team_id
             FROM daily_tokens t
             JOIN users u ON u.id = t.user_id
             WHERE t.token = $1 AND t.valid_date = $2",
        )
        .bind(token)
        .bind(today)
        .fetch_optional(pool)
        .await
    }
}
