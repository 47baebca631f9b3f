use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TimeCard {
    pub id: i64,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_hours: Option<f64>,
    pub notes: Option<String>,
}

/// Time card joined with the identity of its user, for admin views.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TimeCardWithUser {
    pub id: i64,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_hours: Option<f64>,
    pub notes: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
