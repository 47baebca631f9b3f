use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{CreatePhotoRequest, PhotoFilter, UpdatePhotoRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::photo::{Photo, FILE_TYPE_IMAGE};
use crate::domain::services::access_control::{photo_delete, photo_edit, photo_lock_value};
use std::sync::Arc;
use chrono::Utc;
use serde_json::json;
use tracing::info;

pub async fn list_photos(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(filter): Query<PhotoFilter>,
) -> Result<impl IntoResponse, AppError> {
    let photos = state.photo_repo.list(filter.project_id, filter.board_id).await?;
    Ok(Json(photos))
}

pub async fn create_photo(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreatePhotoRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.url.is_empty() {
        return Err(AppError::Validation("Photo URL required".into()));
    }

    let file_type = payload.file_type.unwrap_or_else(|| FILE_TYPE_IMAGE.to_string());
    if file_type != "image" && file_type != "pdf" {
        return Err(AppError::Validation("Invalid file type".into()));
    }

    let photo = Photo {
        id: 0,
        user_id: user.0.id,
        project_id: payload.project_id,
        board_id: payload.board_id,
        contact_id: payload.contact_id,
        url: payload.url,
        file_type,
        notes: payload.notes,
        markup_data: payload.markup_data.map(|v| v.to_string()),
        is_locked: false,
        created_at: Utc::now(),
    };
    let created = state.photo_repo.create(&photo).await?;

    info!("Photo {} uploaded by {}", created.id, created.user_id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_photo(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(photo_id): Path<i64>,
    Json(payload): Json<UpdatePhotoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut photo = state.photo_repo.find_by_id(photo_id).await?
        .ok_or(AppError::NotFound("Photo not found".into()))?;

    let ctx = user.context();

    let (board, membership) = match photo.board_id {
        Some(board_id) => (
            state.board_repo.find_by_id(board_id).await?,
            state.board_repo.find_membership(board_id, &ctx.user_id).await?,
        ),
        None => (None, None),
    };

    photo_edit(&ctx, &photo, board.as_ref(), membership.as_ref()).into_result()?;

    photo.is_locked = photo_lock_value(&ctx, &photo, payload.is_locked);
    if let Some(notes) = payload.notes {
        photo.notes = notes;
    }
    if let Some(markup) = payload.markup_data {
        photo.markup_data = markup.map(|v| v.to_string());
    }

    let updated = state.photo_repo.update(&photo).await?;
    Ok(Json(updated))
}

pub async fn delete_photo(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(photo_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let photo = state.photo_repo.find_by_id(photo_id).await?
        .ok_or(AppError::NotFound("Photo not found".into()))?;

    photo_delete(&user.context(), &photo).into_result()?;

    state.photo_repo.delete(photo_id).await?;

    info!("Photo {} deleted", photo_id);

    Ok(Json(json!({ "message": "Photo deleted" })))
}
