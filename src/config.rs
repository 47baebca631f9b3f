use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Session lifetime in days; expiry slides forward on each request.
    pub session_ttl_days: i64,
    /// Production deployments set Secure + SameSite=None on the session
    /// cookie so the browser client can be served from another origin.
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "5000".to_string()).parse().expect("PORT must be a number"),
            session_ttl_days: env::var("SESSION_TTL_DAYS").unwrap_or_else(|_| "7".to_string()).parse().expect("SESSION_TTL_DAYS must be a number"),
            secure_cookies: env::var("ENVIRONMENT").map(|e| e == "production").unwrap_or(false),
        }
    }
}
