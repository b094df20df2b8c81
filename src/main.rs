use std::sync::Arc;

use anyhow::Context;

use fintrack_api::auth::TokenManager;
use fintrack_api::config::AppConfig;
use fintrack_api::database::PgStore;
use fintrack_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let store = PgStore::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let state = AppState {
        store: Arc::new(store),
        tokens: TokenManager::new(&config.jwt_secret),
    };

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("FinTrack API listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .await
        .context("server error")
}
