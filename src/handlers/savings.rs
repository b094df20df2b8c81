// POST /api/savings/add and GET /api/savings/progress

use axum::{extract::State, http::StatusCode, response::Json, Extension};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{NewSavingsGoal, SavingsGoal};
use crate::error::{require, ApiError};
use crate::middleware::AuthUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSavingsRequest {
    pub goal: Option<String>,
    pub target_amount: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
}

pub async fn add(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<AddSavingsRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let goal = require(body.goal, "goal")?;
    let target_amount = require(body.target_amount, "targetAmount")?;
    let deadline = require(body.deadline, "deadline")?;

    let savings = state
        .store
        .add_savings_goal(NewSavingsGoal {
            user_id: auth.user_id,
            goal,
            target_amount,
            deadline,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Savings goal added successfully", "savings": savings })),
    ))
}

pub async fn progress(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<SavingsGoal>>, ApiError> {
    let savings = state.store.savings_goals_for(auth.user_id).await?;
    Ok(Json(savings))
}
