//! Integration tests for the `/attendance` endpoints: the full
//! issue-scan-validate-report flow over HTTP.

mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use common::{body_json, get, post_json, seed_player};
use serde_json::json;
use sqlx::PgPool;

async fn issue_token(app: axum::Router, user_id: i64) -> String {
    let daily = body_json(get(app, &format!("/api/v1/qr/daily?user_id={user_id}")).await).await;
    daily["data"]["token"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn validate_redeems_a_fresh_token(pool: PgPool) {
    let user_id = seed_player(&pool, "Ana", "ana@example.com", 1).await;
    let operator = seed_player(&pool, "Coach", "coach@example.com", 1).await;
    let app = common::build_test_app(pool);

    let token = issue_token(app.clone(), user_id).await;

    let response = post_json(
        app,
        "/api/v1/attendance/validate",
        json!({ "qr_token": token, "validated_by": operator }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["is_duplicate"], false);
    assert_eq!(json["player_name"], "Ana");
    assert_eq!(json["player_id"], user_id);
    assert_eq!(json["event_type"], "training");
    assert!(json["validated_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn validate_twice_reports_a_duplicate(pool: PgPool) {
    let user_id = seed_player(&pool, "Ana", "ana@example.com", 1).await;
    let app = common::build_test_app(pool);

    let token = issue_token(app.clone(), user_id).await;

    let first = post_json(
        app.clone(),
        "/api/v1/attendance/validate",
        json!({ "qr_token": token }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post_json(
        app,
        "/api/v1/attendance/validate",
        json!({ "qr_token": token }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);

    let json = body_json(second).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["is_duplicate"], true);
    assert_eq!(json["player_name"], "Ana");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn validate_rejects_unknown_tokens(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/attendance/validate",
        json!({ "qr_token": "nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["reason"], "invalid_or_expired");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn validate_requires_a_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/attendance/validate", json!({ "qr_token": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn roster_reflects_attendance_for_the_day(pool: PgPool) {
    let ana = seed_player(&pool, "Ana", "ana@example.com", 1).await;
    let _ben = seed_player(&pool, "Ben", "ben@example.com", 1).await;
    let app = common::build_test_app(pool);

    let token = issue_token(app.clone(), ana).await;
    post_json(
        app.clone(),
        "/api/v1/attendance/validate",
        json!({ "qr_token": token }),
    )
    .await;

    let today = Utc::now().date_naive();
    let response = get(app, &format!("/api/v1/attendance/date/{today}?team_id=1")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["event"]["event_type"], "training");

    let players = data["players"].as_array().unwrap();
    assert_eq!(players.len(), 2);
    for player in players {
        let expected = player["name"] == "Ana";
        assert_eq!(player["attended"].as_bool().unwrap(), expected);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn roster_requires_team_id(pool: PgPool) {
    let app = common::build_test_app(pool);

    let today = Utc::now().date_naive();
    let response = get(app, &format!("/api/v1/attendance/date/{today}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn calendar_counts_todays_redemption(pool: PgPool) {
    let ana = seed_player(&pool, "Ana", "ana@example.com", 1).await;
    let _ben = seed_player(&pool, "Ben", "ben@example.com", 1).await;
    let app = common::build_test_app(pool);

    let token = issue_token(app.clone(), ana).await;
    post_json(
        app.clone(),
        "/api/v1/attendance/validate",
        json!({ "qr_token": token }),
    )
    .await;

    let today = Utc::now().date_naive();
    let response = get(
        app,
        &format!(
            "/api/v1/attendance/calendar?team_id=1&year={}&month={}",
            today.year(),
            today.month(),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["counts"][today.to_string()], 1);
    assert_eq!(data["total_players"], 2);
    assert_eq!(data["events"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn calendar_rejects_an_invalid_month(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/attendance/calendar?team_id=1&year=2024&month=13").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
