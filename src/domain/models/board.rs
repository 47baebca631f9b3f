use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const BOARD_TYPE_GROUP: &str = "group";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Board {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub board_type: String,
    pub created_by: String,
    pub allow_user_editing: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BoardMember {
    pub id: i64,
    pub board_id: i64,
    pub user_id: String,
    pub can_edit: bool,
    pub joined_at: DateTime<Utc>,
}

/// Membership row joined with the member's identity.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BoardMemberWithUser {
    pub id: i64,
    pub board_id: i64,
    pub user_id: String,
    pub can_edit: bool,
    pub joined_at: DateTime<Utc>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
}
