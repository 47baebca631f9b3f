use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{ChangePasswordRequest, LoginRequest};
use crate::api::extractors::auth::{AuthUser, SESSION_COOKIE};
use crate::domain::models::user::UserProfile;
use crate::domain::services::auth_service::{hash_password, verify_password};
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use time::Duration;
use serde_json::json;
use tracing::info;

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation("Email and password required".into()));
    }

    let user = state.user_repo.find_by_email(&payload.email.to_lowercase()).await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let token = state.auth_service.login(&user.id).await?;
    set_session_cookie(&cookies, &state, &token);

    info!("User logged in: {}", user.id);

    Ok(Json(UserProfile::from(user)))
}

pub async fn current_user(user: AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(UserProfile::from(user.0)))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        let _ = state.auth_service.logout(cookie.value()).await;
    }

    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("User logged out");

    Ok(Json(json!({ "message": "Logged out" })))
}

pub async fn change_password(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.current_password.is_empty() || payload.new_password.is_empty() {
        return Err(AppError::Validation("Both passwords required".into()));
    }

    if !verify_password(&payload.current_password, &user.0.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let new_hash = hash_password(&payload.new_password)?;
    state.user_repo.update_password(&user.0.id, &new_hash).await?;

    info!("Password changed for user: {}", user.0.id);

    Ok(Json(json!({ "message": "Password updated" })))
}

fn set_session_cookie(cookies: &Cookies, state: &AppState, token: &str) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_max_age(Duration::days(state.config.session_ttl_days));
    if state.config.secure_cookies {
        cookie.set_secure(true);
        cookie.set_same_site(SameSite::None);
    } else {
        cookie.set_same_site(SameSite::Lax);
    }
    cookies.add(cookie);
}
