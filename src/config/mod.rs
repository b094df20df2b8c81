use std::env;

use thiserror::Error;

/// Port used when `PORT` is absent or unparseable.
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Process configuration, read once at startup and passed down explicitly.
///
/// Nothing in the request path touches the environment; handlers receive what
/// they need through `AppState`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string (`DATABASE_URL`).
    pub database_url: String,
    /// HS256 secret for bearer tokens (`JWT_SECRET`).
    pub jwt_secret: String,
    /// Listen port (`PORT`, defaults to 5000).
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}
