use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A held investment. Wire name for the kind is `type`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub investment_type: String,
    pub initial_amount: f64,
    pub current_value: f64,
}

impl Investment {
    /// Percentage gain or loss relative to the initial amount.
    ///
    /// A zero initial amount divides by zero and yields the IEEE f64
    /// sentinel (infinity, or NaN when the value is also zero); serde_json
    /// puts non-finite numbers on the wire as `null`.
    pub fn roi(&self) -> f64 {
        (self.current_value - self.initial_amount) / self.initial_amount * 100.0
    }
}

#[derive(Debug, Clone)]
pub struct NewInvestment {
    pub user_id: Uuid,
    pub investment_type: String,
    pub initial_amount: f64,
    pub current_value: f64,
}

/// Derived read returned by the returns endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct InvestmentReturn {
    #[serde(rename = "type")]
    pub investment_type: String,
    pub roi: f64,
}
