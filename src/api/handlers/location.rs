use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::CreateLocationRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::location::Location;
use std::sync::Arc;
use chrono::Utc;

pub async fn create_location(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let location = Location {
        id: 0,
        user_id: user.0.id,
        lat: payload.lat,
        lng: payload.lng,
        timestamp: Utc::now(),
    };
    let created = state.location_repo.create(&location).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn live_locations(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let locations = state.location_repo.list_live().await?;
    Ok(Json(locations))
}
