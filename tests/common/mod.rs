use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use fintrack_api::auth::TokenManager;
use fintrack_api::database::MemoryStore;
use fintrack_api::{app, AppState};

/// Production router over a fresh in-memory store. Each test gets its own
/// state, so tests never see each other's users or records.
pub fn test_app() -> Router {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        tokens: TokenManager::new("integration-test-secret"),
    };
    app(state)
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .context("failed to read response body")?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).context("response body is not JSON")?
    };
    Ok((status, value))
}

pub async fn post(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: Value,
) -> Result<(StatusCode, Value)> {
    send(app, Method::POST, path, token, Some(body)).await
}

pub async fn get(app: &Router, path: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
    send(app, Method::GET, path, token, None).await
}

/// Register a user and log them in, returning a bearer token.
pub async fn register_and_login(app: &Router, name: &str, email: &str) -> Result<String> {
    let (status, _) = post(
        app,
        "/api/register",
        None,
        json!({ "name": name, "email": email, "password": "hunter2" }),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::CREATED, "register failed: {status}");

    let (status, body) = post(
        app,
        "/api/login",
        None,
        json!({ "email": email, "password": "hunter2" }),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::OK, "login failed: {status}");

    body["token"]
        .as_str()
        .map(str::to_string)
        .context("login response carried no token")
}
