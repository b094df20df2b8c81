use std::sync::Arc;

use axum::{extract::State, middleware::from_fn_with_state, routing::get, routing::post, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use auth::TokenManager;
use database::Store;

/// Process-wide dependencies, built once in `main` (or a test harness) and
/// cloned into every handler. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: TokenManager,
}

/// Assemble the full router. Lives in the library so integration tests can
/// drive the exact production routing against an in-memory store.
pub fn app(state: AppState) -> Router {
    let guarded = Router::new()
        .merge(income_routes())
        .merge(expense_routes())
        .merge(savings_routes())
        .merge(investment_routes())
        .merge(goal_routes())
        .route_layer(from_fn_with_state(state.clone(), middleware::require_auth));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(credential_routes())
        // Protected financial API
        .merge(guarded)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn credential_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
}

fn income_routes() -> Router<AppState> {
    use handlers::income;

    Router::new()
        .route("/api/income/add", post(income::add))
        .route("/api/income/history", get(income::history))
}

fn expense_routes() -> Router<AppState> {
    use handlers::expenses;

    Router::new()
        .route("/api/expenses/add", post(expenses::add))
        .route("/api/expenses/reports", get(expenses::reports))
}

fn savings_routes() -> Router<AppState> {
    use handlers::savings;

    Router::new()
        .route("/api/savings/add", post(savings::add))
        .route("/api/savings/progress", get(savings::progress))
}

fn investment_routes() -> Router<AppState> {
    use handlers::investments;

    Router::new()
        .route("/api/investments/add", post(investments::add))
        .route("/api/investments/returns", get(investments::returns))
}

fn goal_routes() -> Router<AppState> {
    use handlers::goals;

    Router::new()
        .route("/api/goals/add", post(goals::add))
        .route("/api/goals/progress", get(goals::progress))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "FinTrack API",
        "version": version,
        "description": "Personal finance tracker API built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "register": "POST /api/register (public)",
            "login": "POST /api/login (public - token acquisition)",
            "income": "/api/income/add, /api/income/history (protected)",
            "expenses": "/api/expenses/add, /api/expenses/reports (protected)",
            "savings": "/api/savings/add, /api/savings/progress (protected)",
            "investments": "/api/investments/add, /api/investments/returns (protected)",
            "goals": "/api/goals/add, /api/goals/progress (protected)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
