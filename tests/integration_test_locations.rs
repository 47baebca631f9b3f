mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_live_view_keeps_one_row_per_user() {
    let app = TestApp::new().await;
    app.seed_user("a@example.com", "pw123456", "user").await;
    app.seed_user("b@example.com", "pw123456", "user").await;
    let a = app.login("a@example.com", "pw123456").await;
    let b = app.login("b@example.com", "pw123456").await;

    for (lat, lng) in [(51.0, 7.0), (51.1, 7.1), (51.2, 7.2)] {
        let (status, _) = app.post("/api/locations", Some(&a), json!({ "lat": lat, "lng": lng })).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    app.post("/api/locations", Some(&b), json!({ "lat": 48.1, "lng": 11.6 })).await;

    let (status, body) = app.get("/api/locations/live", Some(&b)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2, "exactly one row per reporting user");

    let a_row = rows.iter().find(|r| r["email"] == "a@example.com").unwrap();
    assert_eq!(a_row["lat"], 51.2);
    assert_eq!(a_row["lng"], 7.2);
}

#[tokio::test]
async fn test_idle_users_are_not_dropped_from_live_view() {
    let app = TestApp::new().await;
    let idle = app.seed_user("idle@example.com", "pw123456", "user").await;
    app.seed_user("busy@example.com", "pw123456", "user").await;
    let busy = app.login("busy@example.com", "pw123456").await;

    // One old ping from the idle user, then a pile of fresh ones from the
    // busy user. The idle user must still appear.
    sqlx::query("INSERT INTO locations (user_id, lat, lng, timestamp) VALUES (?, ?, ?, ?)")
        .bind(&idle)
        .bind(50.0)
        .bind(8.0)
        .bind(chrono::Utc::now() - chrono::Duration::days(3))
        .execute(&app.pool)
        .await
        .unwrap();

    for i in 0..150 {
        app.post(
            "/api/locations",
            Some(&busy),
            json!({ "lat": 52.0 + f64::from(i) * 0.001, "lng": 13.0 }),
        ).await;
    }

    let (status, body) = app.get("/api/locations/live", Some(&busy)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r["email"] == "idle@example.com"));
}

#[tokio::test]
async fn test_location_posting_requires_auth() {
    let app = TestApp::new().await;
    let (status, _) = app.post("/api/locations", None, json!({ "lat": 1.0, "lng": 2.0 })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
