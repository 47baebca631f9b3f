use fieldops_backend::{
    api::router::create_router,
    config::Config,
    domain::models::user::User,
    domain::services::auth_service::hash_password,
    infra::factory::build_state,
    state::AppState,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            session_ttl_days: 7,
            secure_cookies: false,
        };

        let state = Arc::new(build_state(&config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Inserts a user directly through the repository and returns its id.
    pub async fn seed_user(&self, email: &str, password: &str, role: &str) -> String {
        let user = User::new(
            email.to_string(),
            "Test".to_string(),
            "User".to_string(),
            hash_password(password).unwrap(),
            role.to_string(),
        );
        let created = self.state.user_repo.create(&user).await.expect("Failed to seed user");
        created.id
    }

    /// Logs in and returns the raw session token from the Set-Cookie header.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let payload = serde_json::json!({ "email": email, "password": password });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let session_cookie = cookies.iter()
            .find(|c| c.contains("session_token="))
            .expect("No session_token cookie returned");

        let start = session_cookie.find("session_token=").unwrap() + 14;
        let end = session_cookie[start..].find(';').unwrap_or(session_cookie.len() - start);
        session_cookie[start..start + end].to_string()
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        session: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = session {
            builder = builder.header(header::COOKIE, format!("session_token={}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, session: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, session, None).await
    }

    pub async fn post(&self, uri: &str, session: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, session, Some(body)).await
    }

    pub async fn put(&self, uri: &str, session: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, session, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, session: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, session, body).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
