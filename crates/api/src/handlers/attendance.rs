//! Handlers for the `/attendance` resource: redemption and aggregation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use rollcall_core::types::{DayDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};

use rollcall_db::models::attendance::RedemptionOutcome;
use rollcall_db::repositories::AttendanceRepo;

use crate::error::{AppError, AppResult};
use crate::query::TeamParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /attendance/calendar`.
#[derive(Debug, Deserialize)]
pub struct CalendarParams {
    pub team_id: DbId,
    pub year: i32,
    pub month: u32,
}

/// Request body for `POST /attendance/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub qr_token: String,
    /// Operator user id supplied by the identity subsystem.
    pub validated_by: Option<DbId>,
}

/// Response for `POST /attendance/validate`.
///
/// A re-scan of an already-used token is a successful duplicate, not an
/// error: the operator UI must not show a failure for a harmless
/// double-scan.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_duplicate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_at: Option<Timestamp>,
}

/// POST /api/v1/attendance/validate
///
/// Redeem a scanned token: mark it used and record the attendance fact as
/// one atomic unit. Unknown and expired tokens collapse to a single
/// `invalid_or_expired` reason.
pub async fn validate(
    State(state): State<AppState>,
    Json(body): Json<ValidateRequest>,
) -> AppResult<impl IntoResponse> {
    if body.qr_token.is_empty() {
        return Err(AppError::BadRequest("qr_token is required".into()));
    }

    // One server-side clock reading drives the whole redemption.
    let now = Utc::now();
    let outcome = AttendanceRepo::redeem(
        &state.pool,
        &body.qr_token,
        now.date_naive(),
        now.time(),
        body.validated_by,
    )
    .await?;

    let (status, response) = match outcome {
        RedemptionOutcome::Invalid => (
            StatusCode::BAD_REQUEST,
            ValidateResponse {
                success: false,
                reason: Some("invalid_or_expired"),
                is_duplicate: None,
                player_name: None,
                player_id: None,
                event_type: None,
                validated_at: None,
            },
        ),
        RedemptionOutcome::Duplicate { player_name } => (
            StatusCode::OK,
            ValidateResponse {
                success: true,
                reason: None,
                is_duplicate: Some(true),
                player_name: Some(player_name),
                player_id: None,
                event_type: None,
                validated_at: None,
            },
        ),
        RedemptionOutcome::Redeemed {
            player_id,
            player_name,
            event_id: _,
            event_type,
            validated_at,
        } => (
            StatusCode::OK,
            ValidateResponse {
                success: true,
                reason: None,
                is_duplicate: Some(false),
                player_name: Some(player_name),
                player_id: Some(player_id),
                event_type: Some(event_type),
                validated_at: Some(validated_at),
            },
        ),
    };

    Ok((status, Json(response)))
}

/// GET /api/v1/attendance/date/{date}?team_id=
///
/// Roster view for one date: the resolved event (if any) and every team
/// player with an `attended` flag.
pub async fn roster_for_date(
    State(state): State<AppState>,
    Path(date): Path<DayDate>,
    Query(params): Query<TeamParams>,
) -> AppResult<impl IntoResponse> {
    let roster = AttendanceRepo::roster_for_date(&state.pool, params.team_id, date).await?;
    Ok(Json(DataResponse { data: roster }))
}

/// GET /api/v1/attendance/calendar?team_id=&year=&month=
///
/// Month summary for the calendar: events, per-date attendance counts
/// (days without events omitted), and team size.
pub async fn calendar(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> AppResult<impl IntoResponse> {
    let start = DayDate::from_ymd_opt(params.year, params.month, 1)
        .ok_or_else(|| AppError::BadRequest("Invalid year/month".into()))?;
    let end = if params.month == 12 {
        DayDate::from_ymd_opt(params.year + 1, 1, 1)
    } else {
        DayDate::from_ymd_opt(params.year, params.month + 1, 1)
    }
    .ok_or_else(|| AppError::BadRequest("Invalid year/month".into()))?;

    let summary =
        AttendanceRepo::calendar_summary(&state.pool, params.team_id, start, end).await?;
    Ok(Json(DataResponse { data: summary }))
}
