use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field (leave the value alone) from an explicit
/// null (clear it). Pair with `#[serde(default)]`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

#[derive(Deserialize)]
pub struct DeleteUserRequest {
    pub admin_password: String,
}

#[derive(Deserialize)]
pub struct ClockOutRequest {
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateLocationRequest {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct AddProjectMemberRequest {
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct CreateProjectMessageRequest {
    pub content: String,
}

#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CreatePhotoRequest {
    pub url: String,
    pub notes: Option<String>,
    pub project_id: Option<i64>,
    pub board_id: Option<i64>,
    pub contact_id: Option<i64>,
    pub markup_data: Option<serde_json::Value>,
    pub file_type: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePhotoRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub markup_data: Option<Option<serde_json::Value>>,
    pub is_locked: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,
    pub member_ids: Option<Vec<String>>,
    pub allow_user_editing: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateBoardRequest {
    pub name: Option<String>,
    pub allow_user_editing: Option<bool>,
}

#[derive(Deserialize)]
pub struct AddBoardMemberRequest {
    pub user_id: String,
    pub can_edit: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateBoardMemberRequest {
    pub can_edit: bool,
}

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub board_id: i64,
    pub content: Option<String>,
    pub photo_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct PhotoFilter {
    pub project_id: Option<i64>,
    pub board_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct TimeCardFilter {
    pub user_id: Option<String>,
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Deserialize)]
pub struct PeriodQuery {
    pub period: Option<String>,
}
