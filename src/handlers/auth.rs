// POST /api/register and POST /api/login - credential lifecycle

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password;
use crate::database::models::NewUser;
use crate::error::{require, ApiError};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create an account. No token is issued here; the client logs in next.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let name = require(body.name, "name")?;
    let email = require(body.email, "email")?;
    let password = require(body.password, "password")?;

    // Cheap equality lookup first; the store's unique constraint still backs
    // this up against a concurrent registration.
    if state.store.find_user_by_email(&email).await?.is_some() {
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = password::hash(&password)?;
    let user = state
        .store
        .create_user(NewUser {
            name,
            email,
            password_hash,
        })
        .await?;

    tracing::info!("registered user {}", user.id);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

/// Verify credentials and issue a bearer token binding the user id.
///
/// Unknown email and wrong password answer with the same generic message so
/// the response does not reveal which half was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let email = require(body.email, "email")?;
    let password = require(body.password, "password")?;

    let user = state
        .store
        .find_user_by_email(&email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify(&password, &user.password_hash)? {
        tracing::warn!("failed login for user {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id)?;
    Ok(Json(json!({ "token": token })))
}
