use std::sync::Arc;
use crate::domain::{models::session::Session, ports::SessionRepository};
use crate::error::AppError;
use crate::config::Config;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

/// Issues and validates opaque session tokens. The raw token only ever lives
/// in the cookie; the store sees its SHA-256 hash.
pub struct AuthService {
    repo: Arc<dyn SessionRepository>,
    config: Config,
}

impl AuthService {
    pub fn new(repo: Arc<dyn SessionRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    pub async fn login(&self, user_id: &str) -> Result<String, AppError> {
        let raw_token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect();

        let session = Session::new(self.hash_token(&raw_token), user_id.to_string(), self.config.session_ttl_days);
        self.repo.create(&session).await?;
        Ok(raw_token)
    }

    /// Resolves a raw cookie token to a live session, sliding the expiry
    /// forward on every hit.
    pub async fn authenticate(&self, raw_token: &str) -> Result<Option<Session>, AppError> {
        let token_hash = self.hash_token(raw_token);

        let Some(session) = self.repo.find(&token_hash).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        if session.expires_at < now {
            self.repo.delete(&token_hash).await?;
            return Ok(None);
        }

        let renewed = now + Duration::days(self.config.session_ttl_days);
        self.repo.touch(&token_hash, renewed).await?;

        Ok(Some(session))
    }

    pub async fn logout(&self, raw_token: &str) -> Result<(), AppError> {
        self.repo.delete(&self.hash_token(raw_token)).await
    }

    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string())
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
