use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::state::AppState;
use crate::error::AppError;
use crate::domain::models::user::User;
use crate::domain::services::access_control::AuthContext;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const SESSION_COOKIE: &str = "session_token";

/// Resolves the acting user from the session cookie. The server-side session
/// record is the source of truth; the cookie only carries the opaque token.
pub struct AuthUser(pub User);

impl AuthUser {
    /// Explicit context handed to the access-control checks.
    pub fn context(&self) -> AuthContext {
        AuthContext {
            user_id: self.0.id.clone(),
            role: self.0.role.clone(),
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(AppError::Internal)?;

        let token = cookies.get(SESSION_COOKIE)
            .ok_or(AppError::Unauthorized)?
            .value()
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let session = app_state.auth_service.authenticate(&token).await?
            .ok_or(AppError::Unauthorized)?;

        let user = app_state.user_repo.find_by_id(&session.user_id).await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("user_id", &user.id);

        Ok(AuthUser(user))
    }
}
