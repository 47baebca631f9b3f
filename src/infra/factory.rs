use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    sqlite_user_repo::SqliteUserRepo,
    sqlite_session_repo::SqliteSessionRepo,
    sqlite_time_card_repo::SqliteTimeCardRepo,
    sqlite_location_repo::SqliteLocationRepo,
    sqlite_project_repo::SqliteProjectRepo,
    sqlite_board_repo::SqliteBoardRepo,
    sqlite_contact_repo::SqliteContactRepo,
    sqlite_photo_repo::SqlitePhotoRepo,
    sqlite_message_repo::SqliteMessageRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    build_state(config, pool)
}

pub fn build_state(config: &Config, pool: SqlitePool) -> AppState {
    let session_repo = Arc::new(SqliteSessionRepo::new(pool.clone()));
    let auth_service = Arc::new(AuthService::new(session_repo.clone(), config.clone()));

    AppState {
        config: config.clone(),
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        session_repo,
        time_card_repo: Arc::new(SqliteTimeCardRepo::new(pool.clone())),
        location_repo: Arc::new(SqliteLocationRepo::new(pool.clone())),
        project_repo: Arc::new(SqliteProjectRepo::new(pool.clone())),
        board_repo: Arc::new(SqliteBoardRepo::new(pool.clone())),
        contact_repo: Arc::new(SqliteContactRepo::new(pool.clone())),
        photo_repo: Arc::new(SqlitePhotoRepo::new(pool.clone())),
        message_repo: Arc::new(SqliteMessageRepo::new(pool)),
        auth_service,
    }
}

async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
