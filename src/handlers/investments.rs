// POST /api/investments/add and GET /api/investments/returns

use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{InvestmentReturn, NewInvestment};
use crate::error::{require, ApiError};
use crate::middleware::AuthUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddInvestmentRequest {
    #[serde(rename = "type")]
    pub investment_type: Option<String>,
    pub initial_amount: Option<f64>,
    pub current_value: Option<f64>,
}

pub async fn add(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<AddInvestmentRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let investment_type = require(body.investment_type, "type")?;
    let initial_amount = require(body.initial_amount, "initialAmount")?;
    let current_value = require(body.current_value, "currentValue")?;

    let investment = state
        .store
        .add_investment(NewInvestment {
            user_id: auth.user_id,
            investment_type,
            initial_amount,
            current_value,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Investment added successfully", "investment": investment })),
    ))
}

/// Derived read: ROI percentage per investment. A zero initial amount yields
/// a non-finite f64, which serde_json writes as `null`.
pub async fn returns(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<InvestmentReturn>>, ApiError> {
    let investments = state.store.investments_for(auth.user_id).await?;

    let returns = investments
        .into_iter()
        .map(|investment| InvestmentReturn {
            roi: investment.roi(),
            investment_type: investment.investment_type,
        })
        .collect();

    Ok(Json(returns))
}
