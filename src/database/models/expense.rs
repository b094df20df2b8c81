use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// Insert payload; the store assigns `id` and defaults `date` to now.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub user_id: Uuid,
    pub category: String,
    pub amount: f64,
}
