use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{CreateUserRequest, DeleteUserRequest, UpdateRoleRequest, UpdateUserRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::user::{User, UserProfile, ROLE_ADMIN, ROLE_USER};
use crate::domain::services::access_control::admin_only;
use crate::domain::services::auth_service::{hash_password, verify_password};
use std::sync::Arc;
use chrono::Utc;
use serde_json::json;
use tracing::info;

fn validate_role(role: &str) -> Result<(), AppError> {
    if role != ROLE_ADMIN && role != ROLE_USER {
        return Err(AppError::Validation("Invalid role".into()));
    }
    Ok(())
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_repo.list().await?;
    let safe: Vec<UserProfile> = users.into_iter().map(UserProfile::from).collect();
    Ok(Json(safe))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    if payload.first_name.is_empty() || payload.last_name.is_empty()
        || payload.email.is_empty() || payload.password.is_empty()
    {
        return Err(AppError::Validation("All fields required".into()));
    }

    let role = payload.role.unwrap_or_else(|| ROLE_USER.to_string());
    validate_role(&role)?;

    let email = payload.email.to_lowercase();
    if state.user_repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::Validation("Email already exists".into()));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = User::new(email, payload.first_name, payload.last_name, password_hash, role);
    let created = state.user_repo.create(&user).await?;

    info!("Created user: {}", created.id);

    Ok((StatusCode::CREATED, Json(UserProfile::from(created))))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    let mut user = state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if let Some(first_name) = payload.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = payload.last_name {
        user.last_name = last_name;
    }
    if let Some(email) = payload.email {
        user.email = email.to_lowercase();
    }
    if let Some(role) = payload.role {
        validate_role(&role)?;
        user.role = role;
    }
    user.updated_at = Utc::now();

    let updated = state.user_repo.update(&user).await?;
    Ok(Json(UserProfile::from(updated)))
}

pub async fn update_role(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateRoleRequest>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;
    validate_role(&payload.role)?;

    let mut user = state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    user.role = payload.role;
    user.updated_at = Utc::now();
    state.user_repo.update(&user).await?;

    info!("Role updated for user: {}", user_id);

    Ok(Json(json!({ "message": "Role updated" })))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path(user_id): Path<String>,
    Json(payload): Json<DeleteUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    // Lockout guard: checked before the password so it holds regardless of
    // whether the submitted password is correct.
    if user_id == admin.0.id {
        return Err(AppError::Validation("Cannot delete yourself".into()));
    }

    if payload.admin_password.is_empty() {
        return Err(AppError::Validation("Admin password required".into()));
    }
    if !verify_password(&payload.admin_password, &admin.0.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let target = state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    state.user_repo.delete(&target.id).await?;

    info!("Deleted user {}", user_id);

    Ok(Json(json!({ "message": "User deleted" })))
}
