use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::SendMessageRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::message::Message;
use crate::domain::services::access_control::board_access;
use std::sync::Arc;
use chrono::Utc;

const MESSAGE_LIMIT: i64 = 100;

pub async fn board_messages(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(board_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.board_repo.find_by_id(board_id).await?
        .ok_or(AppError::NotFound("Board not found".into()))?;

    let ctx = user.context();
    let membership = state.board_repo.find_membership(board_id, &ctx.user_id).await?;
    board_access(&ctx, membership.as_ref()).into_result()?;

    // Newest 100 from the store, handed back oldest-first.
    let mut messages = state.message_repo.list_by_board(board_id, MESSAGE_LIMIT).await?;
    messages.reverse();
    Ok(Json(messages))
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.content.is_none() && payload.photo_id.is_none() {
        return Err(AppError::Validation("Message needs content or a photo".into()));
    }

    state.board_repo.find_by_id(payload.board_id).await?
        .ok_or(AppError::NotFound("Board not found".into()))?;

    if let Some(photo_id) = payload.photo_id {
        state.photo_repo.find_by_id(photo_id).await?
            .ok_or(AppError::NotFound("Photo not found".into()))?;
    }

    let ctx = user.context();
    let membership = state.board_repo.find_membership(payload.board_id, &ctx.user_id).await?;
    board_access(&ctx, membership.as_ref()).into_result()?;

    let message = Message {
        id: 0,
        sender_id: ctx.user_id,
        board_id: Some(payload.board_id),
        content: payload.content,
        photo_id: payload.photo_id,
        is_locked: false,
        created_at: Utc::now(),
    };
    let created = state.message_repo.create(&message).await?;

    let full = state.message_repo.find_with_sender(created.id).await?
        .ok_or(AppError::Internal)?;

    Ok((StatusCode::CREATED, Json(full)))
}
