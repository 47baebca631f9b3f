use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const FILE_TYPE_IMAGE: &str = "image";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Photo {
    pub id: i64,
    pub user_id: String,
    pub project_id: Option<i64>,
    pub board_id: Option<i64>,
    pub contact_id: Option<i64>,
    pub url: String,
    pub file_type: String,
    pub notes: Option<String>,
    /// Freeform annotation payload, stored as raw JSON text.
    pub markup_data: Option<String>,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
}

/// Photo joined with the uploader's identity, for listings.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PhotoWithUser {
    pub id: i64,
    pub user_id: String,
    pub project_id: Option<i64>,
    pub board_id: Option<i64>,
    pub contact_id: Option<i64>,
    pub url: String,
    pub file_type: String,
    pub notes: Option<String>,
    pub markup_data: Option<String>,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
