use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Message {
    pub id: i64,
    pub sender_id: String,
    pub board_id: Option<i64>,
    pub content: Option<String>,
    pub photo_id: Option<i64>,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
}

/// Message joined with sender identity and the attached photo URL.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MessageWithSender {
    pub id: i64,
    pub sender_id: String,
    pub board_id: Option<i64>,
    pub content: Option<String>,
    pub photo_id: Option<i64>,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub photo_url: Option<String>,
}
