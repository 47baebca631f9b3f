mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_user_creation_is_admin_only() {
    let app = TestApp::new().await;
    app.seed_user("admin@example.com", "pw123456", "admin").await;
    app.seed_user("plain@example.com", "pw123456", "user").await;
    let admin = app.login("admin@example.com", "pw123456").await;
    let plain = app.login("plain@example.com", "pw123456").await;

    let payload = json!({
        "first_name": "New", "last_name": "Hire",
        "email": "hire@example.com", "password": "welcome1",
    });

    let (status, _) = app.post("/api/users", Some(&plain), payload.clone()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, created) = app.post("/api/users", Some(&admin), payload).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["role"], "user");
    assert!(created.get("password_hash").is_none());

    // Duplicate email is rejected before it hits the store's constraint.
    let (status, body) = app.post("/api/users", Some(&admin), json!({
        "first_name": "Other", "last_name": "Person",
        "email": "HIRE@example.com", "password": "welcome2",
    })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn test_role_must_be_admin_or_user() {
    let app = TestApp::new().await;
    app.seed_user("admin@example.com", "pw123456", "admin").await;
    let target = app.seed_user("target@example.com", "pw123456", "user").await;
    let admin = app.login("admin@example.com", "pw123456").await;

    let (status, _) = app.post("/api/users", Some(&admin), json!({
        "first_name": "Bad", "last_name": "Role",
        "email": "bad@example.com", "password": "pw", "role": "superuser",
    })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let uri = format!("/api/users/{}/role", target);
    let (status, _) = app.put(&uri, Some(&admin), json!({ "role": "owner" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.put(&uri, Some(&admin), json!({ "role": "admin" })).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_cannot_delete_self_regardless_of_password() {
    let app = TestApp::new().await;
    let admin_id = app.seed_user("admin@example.com", "pw123456", "admin").await;
    let admin = app.login("admin@example.com", "pw123456").await;

    let uri = format!("/api/users/{}", admin_id);

    // Correct password: still rejected.
    let (status, body) = app.delete(&uri, Some(&admin), Some(json!({ "admin_password": "pw123456" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot delete yourself");

    // Wrong password: same rejection, not a credential error.
    let (status, body) = app.delete(&uri, Some(&admin), Some(json!({ "admin_password": "wrong" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot delete yourself");
}

#[tokio::test]
async fn test_user_delete_requires_admin_password() {
    let app = TestApp::new().await;
    app.seed_user("admin@example.com", "pw123456", "admin").await;
    let target = app.seed_user("target@example.com", "pw123456", "user").await;
    let admin = app.login("admin@example.com", "pw123456").await;

    let uri = format!("/api/users/{}", target);

    let (status, _) = app.delete(&uri, Some(&admin), Some(json!({ "admin_password": "not-it" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.delete(&uri, Some(&admin), Some(json!({ "admin_password": "pw123456" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.delete(&uri, Some(&admin), Some(json!({ "admin_password": "pw123456" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_listing_strips_credentials() {
    let app = TestApp::new().await;
    app.seed_user("a@example.com", "pw123456", "user").await;
    app.seed_user("b@example.com", "pw123456", "user").await;
    let session = app.login("a@example.com", "pw123456").await;

    let (status, body) = app.get("/api/users", Some(&session)).await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_admin_update_user_profile() {
    let app = TestApp::new().await;
    app.seed_user("admin@example.com", "pw123456", "admin").await;
    let target = app.seed_user("old@example.com", "pw123456", "user").await;
    let admin = app.login("admin@example.com", "pw123456").await;

    let uri = format!("/api/users/{}", target);
    let (status, updated) = app.put(&uri, Some(&admin), json!({
        "first_name": "Renamed",
        "email": "New@Example.com",
    })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["first_name"], "Renamed");
    assert_eq!(updated["email"], "new@example.com");

    let (status, _) = app.put("/api/users/ghost", Some(&admin), json!({ "first_name": "X" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
