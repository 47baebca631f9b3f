mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use common::TestApp;
use serde_json::json;

async fn seed_card(app: &TestApp, user_id: &str, start: DateTime<Utc>, hours: Option<f64>) {
    let end = hours.map(|h| start + Duration::milliseconds((h * 3_600_000.0) as i64));
    sqlx::query(
        "INSERT INTO time_cards (user_id, start_time, end_time, total_hours) VALUES (?, ?, ?, ?)"
    )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .bind(hours)
        .execute(&app.pool)
        .await
        .expect("Failed to seed time card");
}

#[tokio::test]
async fn test_clock_in_out_lifecycle() {
    let app = TestApp::new().await;
    app.seed_user("worker@example.com", "pw123456", "user").await;
    let session = app.login("worker@example.com", "pw123456").await;

    let (status, body) = app.get("/api/time-cards/status", Some(&session)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], false);
    assert!(body["current_session"].is_null());

    let (status, card) = app.post("/api/time-cards/clock-in", Some(&session), json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(card["end_time"].is_null());
    assert!(card["total_hours"].is_null());

    let (status, body) = app.get("/api/time-cards/status", Some(&session)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], true);
    assert_eq!(body["current_session"]["id"], card["id"]);

    // Second clock-in while active is rejected.
    let (status, body) = app.post("/api/time-cards/clock-in", Some(&session), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Already clocked in");

    let (status, closed) = app.post(
        "/api/time-cards/clock-out",
        Some(&session),
        json!({ "notes": "fixed the fence" }),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!closed["end_time"].is_null());
    assert_eq!(closed["notes"], "fixed the fence");
    let total = closed["total_hours"].as_f64().unwrap();
    assert!(total >= 0.0 && total < 0.1, "immediate clock-out should be near zero, got {total}");

    // Clocking out twice without a new clock-in fails.
    let (status, body) = app.post("/api/time-cards/clock-out", Some(&session), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Not clocked in");
}

#[tokio::test]
async fn test_open_card_invariant_survives_direct_insert() {
    let app = TestApp::new().await;
    let user_id = app.seed_user("racer@example.com", "pw123456", "user").await;

    seed_card(&app, &user_id, Utc::now(), None).await;

    // A second open card for the same user violates the partial unique index.
    let result = sqlx::query("INSERT INTO time_cards (user_id, start_time) VALUES (?, ?)")
        .bind(&user_id)
        .bind(Utc::now())
        .execute(&app.pool)
        .await;
    assert!(result.is_err(), "store must reject a second open card");
}

#[tokio::test]
async fn test_own_card_listing_newest_first() {
    let app = TestApp::new().await;
    let user_id = app.seed_user("lister@example.com", "pw123456", "user").await;
    let session = app.login("lister@example.com", "pw123456").await;

    let now = Utc::now();
    seed_card(&app, &user_id, now - Duration::days(2), Some(8.0)).await;
    seed_card(&app, &user_id, now - Duration::days(1), Some(6.5)).await;

    let (status, body) = app.get("/api/time-cards", Some(&session)).await;
    assert_eq!(status, StatusCode::OK);
    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["total_hours"], 6.5);
    assert_eq!(cards[1]["total_hours"], 8.0);
}

#[tokio::test]
async fn test_admin_views_require_admin() {
    let app = TestApp::new().await;
    app.seed_user("plain@example.com", "pw123456", "user").await;
    let session = app.login("plain@example.com", "pw123456").await;

    for uri in [
        "/api/admin/time-cards",
        "/api/admin/time-cards/calendar",
        "/api/admin/time-cards/user/someone",
    ] {
        let (status, _) = app.get(uri, Some(&session)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri} should be admin-only");
    }
}

#[tokio::test]
async fn test_calendar_month_window() {
    let app = TestApp::new().await;
    let user_id = app.seed_user("field@example.com", "pw123456", "user").await;
    app.seed_user("boss@example.com", "pw123456", "admin").await;
    let admin = app.login("boss@example.com", "pw123456").await;

    seed_card(&app, &user_id, "2025-03-01T00:00:00Z".parse().unwrap(), Some(4.0)).await;
    seed_card(&app, &user_id, "2025-03-31T23:00:00Z".parse().unwrap(), Some(2.0)).await;
    seed_card(&app, &user_id, "2025-04-01T00:30:00Z".parse().unwrap(), Some(1.0)).await;
    seed_card(&app, &user_id, "2025-02-28T12:00:00Z".parse().unwrap(), Some(3.0)).await;

    let (status, body) = app.get("/api/admin/time-cards/calendar?year=2025&month=3", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 2, "only March cards belong in the March calendar");
    for card in cards {
        assert_eq!(card["email"], "field@example.com", "calendar rows carry user identity");
    }
}

#[tokio::test]
async fn test_calendar_rejects_bad_month() {
    let app = TestApp::new().await;
    app.seed_user("boss2@example.com", "pw123456", "admin").await;
    let admin = app.login("boss2@example.com", "pw123456").await;

    let (status, _) = app.get("/api/admin/time-cards/calendar?year=2025&month=13", Some(&admin)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_period_summary_sums_hours_with_nulls_as_zero() {
    let app = TestApp::new().await;
    let user_id = app.seed_user("summed@example.com", "pw123456", "user").await;
    app.seed_user("boss3@example.com", "pw123456", "admin").await;
    let admin = app.login("boss3@example.com", "pw123456").await;

    let now = Utc::now();
    seed_card(&app, &user_id, now - Duration::hours(3), Some(1.5)).await;
    seed_card(&app, &user_id, now - Duration::hours(2), Some(2.0)).await;
    // Open card: counts as a row but contributes 0 hours.
    seed_card(&app, &user_id, now - Duration::minutes(10), None).await;
    // A card from last year falls outside every period except the fallback.
    seed_card(&app, &user_id, now - Duration::days(400), Some(8.0)).await;

    let uri = format!("/api/admin/time-cards/user/{}?period=year", user_id);
    let (status, body) = app.get(&uri, Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period"], "year");
    assert_eq!(body["cards"].as_array().unwrap().len(), 3);
    let total = body["total_hours"].as_f64().unwrap();
    assert!((total - 3.5).abs() < 1e-9);

    // Unrecognized period tag falls back to the epoch and sees everything.
    let uri = format!("/api/admin/time-cards/user/{}?period=quarter", user_id);
    let (_, body) = app.get(&uri, Some(&admin)).await;
    assert_eq!(body["period"], "other");
    assert_eq!(body["cards"].as_array().unwrap().len(), 4);
    let total = body["total_hours"].as_f64().unwrap();
    assert!((total - 11.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_admin_list_filters() {
    let app = TestApp::new().await;
    let a = app.seed_user("a@example.com", "pw123456", "user").await;
    let b = app.seed_user("b@example.com", "pw123456", "user").await;
    app.seed_user("boss4@example.com", "pw123456", "admin").await;
    let admin = app.login("boss4@example.com", "pw123456").await;

    let now = Utc::now();
    seed_card(&app, &a, now - Duration::days(10), Some(8.0)).await;
    seed_card(&app, &a, now - Duration::days(1), Some(4.0)).await;
    seed_card(&app, &b, now - Duration::days(1), Some(5.0)).await;

    let (status, body) = app.get("/api/admin/time-cards", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let uri = format!("/api/admin/time-cards?user_id={}", a);
    let (_, body) = app.get(&uri, Some(&admin)).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let since = (now - Duration::days(2)).to_rfc3339().replace('+', "%2B");
    let uri = format!("/api/admin/time-cards?start_date={}", since);
    let (_, body) = app.get(&uri, Some(&admin)).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
