//! Read-only handlers for the `/players` resource.
//!
//! Roster CRUD lives in the (external) team management system; this core
//! only reads the roster for display and aggregation.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use rollcall_core::error::CoreError;
use rollcall_core::types::DbId;

use rollcall_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::query::TeamParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/players?team_id=
///
/// List a team's players, ordered by name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TeamParams>,
) -> AppResult<impl IntoResponse> {
    let players = UserRepo::list_players(&state.pool, params.team_id).await?;
    Ok(Json(DataResponse { data: players }))
}

/// GET /api/v1/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let player = UserRepo::find_player(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Player",
            id,
        }))?;
    Ok(Json(DataResponse { data: player }))
}
