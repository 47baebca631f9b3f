use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{
    AddProjectMemberRequest, CreateProjectMessageRequest, CreateProjectRequest, UpdateProjectRequest,
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::project::{Project, ProjectMember, ProjectMessage};
use crate::domain::services::access_control::admin_only;
use std::sync::Arc;
use chrono::Utc;
use serde_json::json;
use tracing::info;

const MESSAGE_LIMIT: i64 = 100;

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let projects = state.project_repo.list().await?;
    Ok(Json(projects))
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.is_empty() {
        return Err(AppError::Validation("Project name required".into()));
    }

    let project = Project {
        id: 0,
        name: payload.name,
        description: payload.description,
        created_by: Some(user.0.id),
        created_at: Utc::now(),
    };
    let created = state.project_repo.create(&project).await?;

    info!("Created project: {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(project_id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut project = state.project_repo.find_by_id(project_id).await?
        .ok_or(AppError::NotFound("Project not found".into()))?;

    if let Some(name) = payload.name {
        project.name = name;
    }
    if payload.description.is_some() {
        project.description = payload.description;
    }

    let updated = state.project_repo.update(&project).await?;
    Ok(Json(updated))
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path(project_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    state.project_repo.delete(project_id).await?;

    info!("Deleted project {}", project_id);

    Ok(Json(json!({ "message": "Project deleted" })))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(project_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let members = state.project_repo.list_members(project_id).await?;
    Ok(Json(members))
}

pub async fn add_member(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path(project_id): Path<i64>,
    Json(payload): Json<AddProjectMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    state.project_repo.find_by_id(project_id).await?
        .ok_or(AppError::NotFound("Project not found".into()))?;

    let member = ProjectMember {
        id: 0,
        project_id,
        user_id: payload.user_id,
        joined_at: Utc::now(),
    };
    let created = state.project_repo.add_member(&member).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path((project_id, user_id)): Path<(i64, String)>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    state.project_repo.remove_member(project_id, &user_id).await?;
    Ok(Json(json!({ "message": "Member removed" })))
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(project_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.project_repo.find_by_id(project_id).await?
        .ok_or(AppError::NotFound("Project not found".into()))?;

    let mut messages = state.project_repo.list_messages(project_id, MESSAGE_LIMIT).await?;
    messages.reverse();
    Ok(Json(messages))
}

pub async fn create_message(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(project_id): Path<i64>,
    Json(payload): Json<CreateProjectMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.content.is_empty() {
        return Err(AppError::Validation("Message content required".into()));
    }

    state.project_repo.find_by_id(project_id).await?
        .ok_or(AppError::NotFound("Project not found".into()))?;

    let message = ProjectMessage {
        id: 0,
        project_id,
        sender_id: user.0.id,
        content: payload.content,
        created_at: Utc::now(),
    };
    let created = state.project_repo.create_message(&message).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
