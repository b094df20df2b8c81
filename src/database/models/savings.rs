use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A savings target; `current_amount` starts at 0 and is store-defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSavingsGoal {
    pub user_id: Uuid,
    pub goal: String,
    pub target_amount: f64,
    pub deadline: DateTime<Utc>,
}
