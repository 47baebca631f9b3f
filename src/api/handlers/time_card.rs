use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{CalendarQuery, ClockOutRequest, PeriodQuery, TimeCardFilter};
use crate::api::dtos::responses::{ClockStatusResponse, PeriodSummaryResponse};
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::access_control::admin_only;
use crate::domain::services::time_tracking::{elapsed_hours, month_bounds, period_start, sum_hours, Period};
use std::sync::Arc;
use chrono::{Datelike, Utc};
use tracing::info;

pub async fn status(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let active = state.time_card_repo.find_open(&user.0.id).await?;
    Ok(Json(ClockStatusResponse {
        active: active.is_some(),
        current_session: active,
    }))
}

pub async fn clock_in(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    // The partial unique index in the store is the real guard here; this
    // insert either wins or comes back as "Already clocked in".
    let card = state.time_card_repo.insert_open(&user.0.id, Utc::now()).await?;

    info!("User {} clocked in", user.0.id);

    Ok((StatusCode::CREATED, Json(card)))
}

pub async fn clock_out(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<ClockOutRequest>,
) -> Result<impl IntoResponse, AppError> {
    let active = state.time_card_repo.find_open(&user.0.id).await?
        .ok_or(AppError::Validation("Not clocked in".into()))?;

    let end = Utc::now();
    let total = elapsed_hours(active.start_time, end);
    let card = state.time_card_repo.close(active.id, end, total, payload.notes).await?;

    info!("User {} clocked out after {:.2}h", user.0.id, total);

    Ok(Json(card))
}

pub async fn list_own(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let cards = state.time_card_repo.list_by_user(&user.0.id).await?;
    Ok(Json(cards))
}

pub async fn admin_list(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Query(filter): Query<TimeCardFilter>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    let cards = state.time_card_repo
        .list_with_users(filter.user_id.as_deref(), filter.start_date, filter.end_date)
        .await?;
    Ok(Json(cards))
}

pub async fn admin_calendar(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    let now = Utc::now();
    let year = query.year.unwrap_or_else(|| now.year());
    let month = query.month.unwrap_or_else(|| now.month());

    let (start, end) = month_bounds(year, month)?;
    let cards = state.time_card_repo
        .list_with_users(None, Some(start), Some(end))
        .await?;
    Ok(Json(cards))
}

pub async fn admin_user_summary(
    State(state): State<Arc<AppState>>,
    admin: AuthUser,
    Path(user_id): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    admin_only(&admin.context()).into_result()?;

    let period = Period::parse(query.period.as_deref().unwrap_or(""));
    let start = period_start(period, Utc::now());

    let cards = state.time_card_repo.list_since(&user_id, start).await?;
    let total_hours = sum_hours(&cards);

    Ok(Json(PeriodSummaryResponse {
        cards,
        total_hours,
        period: period.as_str(),
    }))
}
