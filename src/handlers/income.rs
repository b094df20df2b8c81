// POST /api/income/add and GET /api/income/history

use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{IncomeRecord, NewIncome};
use crate::error::{require, ApiError};
use crate::middleware::AuthUser;
use crate::AppState;

/// Owner identity comes from the auth guard, never from the body; any
/// client-supplied owner field is an unknown key and is dropped by serde.
#[derive(Debug, Deserialize)]
pub struct AddIncomeRequest {
    pub source: Option<String>,
    pub amount: Option<f64>,
}

pub async fn add(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<AddIncomeRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let source = require(body.source, "source")?;
    let amount = require(body.amount, "amount")?;

    let income = state
        .store
        .add_income(NewIncome {
            user_id: auth.user_id,
            source,
            amount,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Income added successfully", "income": income })),
    ))
}

pub async fn history(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<IncomeRecord>>, ApiError> {
    let incomes = state.store.incomes_for(auth.user_id).await?;
    Ok(Json(incomes))
}
