// POST /api/expenses/add and GET /api/expenses/reports

use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{ExpenseRecord, NewExpense};
use crate::error::{require, ApiError};
use crate::middleware::AuthUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddExpenseRequest {
    pub category: Option<String>,
    pub amount: Option<f64>,
}

pub async fn add(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<AddExpenseRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let category = require(body.category, "category")?;
    let amount = require(body.amount, "amount")?;

    let expense = state
        .store
        .add_expense(NewExpense {
            user_id: auth.user_id,
            category,
            amount,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Expense added successfully", "expense": expense })),
    ))
}

pub async fn reports(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<ExpenseRecord>>, ApiError> {
    let expenses = state.store.expenses_for(auth.user_id).await?;
    Ok(Json(expenses))
}
