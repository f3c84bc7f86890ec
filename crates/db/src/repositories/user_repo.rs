//! Read-only access to the `users` table.
//!
//! User lifecycle belongs to the identity subsystem; this core only reads
//! the roster.

use rollcall_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{Player, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, role, team_id, created_at, updated_at";

/// Read-only roster queries.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all players on a team, ordered by name.
    pub async fn list_players(pool: &PgPool, team_id: DbId) -> Result<Vec<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>(
            "SELECT id, name, email, team_id FROM users
             WHERE team_id = $1 AND role = 'player'
             ORDER BY name",
        )
        .bind(team_id)
        .fetch_all(pool)
        .await
    }

    /// Find a single player by id. Admins are not visible through this path.
    pub async fn find_player(pool: &PgPool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        sqlx::query_as::<_, Player>(
            "SELECT id, name, email, team_id FROM users
             WHERE id = $1 AND role = 'player'",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Count the players on a team.
    pub async fn count_players(pool: &PgPool, team_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE team_id = $1 AND role = 'player'")
                .bind(team_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
