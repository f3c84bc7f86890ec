//! Handlers for the `/events` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use rollcall_core::error::CoreError;
use rollcall_core::event_type::EventType;
use rollcall_core::types::{DayDate, DbId};
use serde::Deserialize;

use rollcall_db::models::event::{CreateEvent, UpdateEvent};
use rollcall_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::query::TeamParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /events`.
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    pub team_id: DbId,
    pub from: Option<DayDate>,
    pub to: Option<DayDate>,
}

/// GET /api/v1/events?team_id=&from=&to=
///
/// List a team's events, newest first, optionally bounded by date.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list(&state.pool, params.team_id, params.from, params.to).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/today?team_id=
///
/// Resolve the team's event for today, lazily creating a training event
/// starting now if none exists.
pub async fn today(
    State(state): State<AppState>,
    Query(params): Query<TeamParams>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let event =
        EventRepo::resolve_for_date(&state.pool, params.team_id, now.date_naive(), now.time())
            .await?;
    Ok(Json(DataResponse { data: event }))
}

/// POST /api/v1/events
///
/// Create an explicitly scheduled event.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    EventType::from_str(&input.event_type)?;
    let event = EventRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// PUT /api/v1/events/{id}
///
/// Update an event. Only provided fields change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref ty) = input.event_type {
        EventType::from_str(ty)?;
    }
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))
    }
}
