use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info};
use crate::state::AppState;

const PURGE_INTERVAL: Duration = Duration::from_secs(3600);

/// Periodically removes expired session rows. Sessions already stop
/// authenticating the moment they expire; this just keeps the table small.
pub async fn start_session_purger(state: Arc<AppState>) {
    info!("Starting session purge worker...");

    loop {
        match state.session_repo.delete_expired(Utc::now()).await {
            Ok(0) => {}
            Ok(n) => info!("Purged {} expired sessions", n),
            Err(e) => error!("Failed to purge expired sessions: {:?}", e),
        }
        sleep(PURGE_INTERVAL).await;
    }
}
