use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

/// Server-side session record. The cookie carries the opaque token;
/// only its SHA-256 hash is stored.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Session {
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token_hash: String, user_id: String, ttl_days: i64) -> Self {
        let now = Utc::now();
        Self {
            token_hash,
            user_id,
            expires_at: now + Duration::days(ttl_days),
            created_at: now,
        }
    }
}
