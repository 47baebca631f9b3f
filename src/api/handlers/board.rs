use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{
    AddBoardMemberRequest, CreateBoardRequest, UpdateBoardMemberRequest, UpdateBoardRequest,
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::board::{Board, BoardMember, BOARD_TYPE_GROUP};
use crate::domain::services::access_control::admin_only;
use std::sync::Arc;
use chrono::Utc;
use serde_json::json;
use tracing::info;

pub async fn list_boards(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let ctx = user.context();
    let boards = if ctx.is_admin() {
        state.board_repo.list_all().await?
    } else {
        state.board_repo.list_for_user(&ctx.user_id).await?
    };

    let mut result = Vec::with_capacity(boards.len());
    for board in boards {
        let members = state.board_repo.list_members(board.id).await?;
        result.push(json!({
            "id": board.id,
            "name": board.name,
            "type": board.board_type,
            "created_by": board.created_by,
            "allow_user_editing": board.allow_user_editing,
            "created_at": board.created_at,
            "members": members,
        }));
    }
    Ok(Json(result))
}

pub async fn create_board(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Json(payload): Json<CreateBoardRequest>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    if payload.name.is_empty() {
        return Err(AppError::Validation("Board name required".into()));
    }

    // The creator always ends up a member, with edit rights.
    let mut members: Vec<(String, bool)> = payload.member_ids.unwrap_or_default()
        .into_iter()
        .filter(|id| *id != admin.0.id)
        .map(|id| (id, false))
        .collect();
    members.push((admin.0.id.clone(), true));

    let board = Board {
        id: 0,
        name: payload.name,
        board_type: BOARD_TYPE_GROUP.to_string(),
        created_by: admin.0.id,
        allow_user_editing: payload.allow_user_editing.unwrap_or(false),
        created_at: Utc::now(),
    };
    let created = state.board_repo.create(&board, &members).await?;

    info!("Created board: {}", created.id);

    let members = state.board_repo.list_members(created.id).await?;
    Ok((StatusCode::CREATED, Json(json!({
        "id": created.id,
        "name": created.name,
        "type": created.board_type,
        "created_by": created.created_by,
        "allow_user_editing": created.allow_user_editing,
        "created_at": created.created_at,
        "members": members,
    }))))
}

pub async fn update_board(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path(board_id): Path<i64>,
    Json(payload): Json<UpdateBoardRequest>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    let mut board = state.board_repo.find_by_id(board_id).await?
        .ok_or(AppError::NotFound("Board not found".into()))?;

    if let Some(name) = payload.name {
        board.name = name;
    }
    if let Some(allow) = payload.allow_user_editing {
        board.allow_user_editing = allow;
    }

    let updated = state.board_repo.update(&board).await?;
    Ok(Json(updated))
}

pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path(board_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    state.board_repo.delete(board_id).await?;

    info!("Deleted board {}", board_id);

    Ok(Json(json!({ "message": "Board deleted" })))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(board_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let members = state.board_repo.list_members(board_id).await?;
    Ok(Json(members))
}

pub async fn add_member(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path(board_id): Path<i64>,
    Json(payload): Json<AddBoardMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    state.board_repo.find_by_id(board_id).await?
        .ok_or(AppError::NotFound("Board not found".into()))?;

    if state.board_repo.find_membership(board_id, &payload.user_id).await?.is_some() {
        return Err(AppError::Validation("User already a member".into()));
    }

    let member = BoardMember {
        id: 0,
        board_id,
        user_id: payload.user_id,
        can_edit: payload.can_edit.unwrap_or(false),
        joined_at: Utc::now(),
    };
    let created = state.board_repo.add_member(&member).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_member(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path((board_id, user_id)): Path<(i64, String)>,
    Json(payload): Json<UpdateBoardMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    let member = state.board_repo.update_member(board_id, &user_id, payload.can_edit).await?;
    Ok(Json(member))
}

pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path((board_id, user_id)): Path<(i64, String)>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    state.board_repo.remove_member(board_id, &user_id).await?;
    Ok(Json(json!({ "message": "Member removed" })))
}
