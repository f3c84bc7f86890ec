//! Handlers for the `/qr` resource: daily token issuance and scan preflight.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use rollcall_core::error::CoreError;
use rollcall_core::types::DbId;
use serde::{Deserialize, Serialize};

use rollcall_db::models::daily_token::DailyToken;
use rollcall_db::repositories::{TokenRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /qr/daily`.
#[derive(Debug, Deserialize)]
pub struct DailyParams {
    pub user_id: DbId,
}

/// Owner info attached to a daily token response.
#[derive(Debug, Serialize)]
pub struct TokenOwner {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// Payload for `GET /qr/daily`: the token row plus its owner.
///
/// The display surface polls this and treats `is_used` flipping to true as
/// "redeemed, show success".
#[derive(Debug, Serialize)]
pub struct DailyTokenPayload {
    #[serde(flatten)]
    pub token: DailyToken,
    pub user: TokenOwner,
}

/// Outcome of a non-mutating scan preflight (`GET /qr/verify/{token}`).
///
/// Unknown and expired tokens share one reason so callers cannot probe
/// which dates a token string was ever valid for.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_email: Option<String>,
}

/// GET /api/v1/qr/daily?user_id=
///
/// Get or issue today's token for a user. Issuance is idempotent: repeated
/// calls for the same `(user, day)` return the same row, including under
/// concurrent refetches.
pub async fn get_daily(
    State(state): State<AppState>,
    Query(params): Query<DailyParams>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, params.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: params.user_id,
        }))?;

    // Server-side "today": client clocks never decide token validity.
    let today = Utc::now().date_naive();
    let token = TokenRepo::get_or_issue(&state.pool, user.id, today).await?;

    Ok(Json(DataResponse {
        data: DailyTokenPayload {
            token,
            user: TokenOwner {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        },
    }))
}

/// GET /api/v1/qr/verify/{token}
///
/// Check whether a scanned token would redeem, without mutating anything.
/// Used by the scanner UI to preview a scan before validating.
pub async fn verify(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let found = TokenRepo::find_for_redemption(&state.pool, &token, today).await?;

    let response = match found {
        None => VerifyResponse {
            valid: false,
            reason: Some("invalid_or_expired"),
            token_id: None,
            user_id: None,
            player_name: None,
            player_email: None,
        },
        Some(t) if t.is_used => VerifyResponse {
            valid: false,
            reason: Some("already_used"),
            token_id: None,
            user_id: None,
            player_name: Some(t.player_name),
            player_email: None,
        },
        Some(t) => VerifyResponse {
            valid: true,
            reason: None,
            token_id: Some(t.id),
            user_id: Some(t.user_id),
            player_name: Some(t.player_name),
            player_email: Some(t.player_email),
        },
    };

    Ok(Json(response))
}
