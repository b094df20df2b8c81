use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Generic financial goal; same shape as a savings goal but tracked in its
/// own collection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFinancialGoal {
    pub user_id: Uuid,
    pub goal: String,
    pub target_amount: f64,
    pub deadline: DateTime<Utc>,
}
