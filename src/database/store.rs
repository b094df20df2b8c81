use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{
    ExpenseRecord, FinancialGoal, IncomeRecord, Investment, NewExpense, NewFinancialGoal,
    NewIncome, NewInvestment, NewSavingsGoal, NewUser, SavingsGoal, User,
};

/// Errors surfaced by a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User already exists")]
    DuplicateEmail,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence seam for the API.
///
/// Every method is a single atomic read or single-document write; there are
/// no cross-collection transactions. Financial records are append-only and
/// always scoped by their owning user id. The production implementation is
/// Postgres-backed; tests run against the in-memory one.
#[async_trait]
pub trait Store: Send + Sync {
    /// Liveness probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Insert a user; fails with [`StoreError::DuplicateEmail`] when the
    /// email is already registered.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn add_income(&self, income: NewIncome) -> Result<IncomeRecord, StoreError>;
    async fn incomes_for(&self, user_id: Uuid) -> Result<Vec<IncomeRecord>, StoreError>;

    async fn add_expense(&self, expense: NewExpense) -> Result<ExpenseRecord, StoreError>;
    async fn expenses_for(&self, user_id: Uuid) -> Result<Vec<ExpenseRecord>, StoreError>;

    async fn add_savings_goal(&self, savings: NewSavingsGoal) -> Result<SavingsGoal, StoreError>;
    async fn savings_goals_for(&self, user_id: Uuid) -> Result<Vec<SavingsGoal>, StoreError>;

    async fn add_investment(&self, investment: NewInvestment) -> Result<Investment, StoreError>;
    async fn investments_for(&self, user_id: Uuid) -> Result<Vec<Investment>, StoreError>;

    async fn add_goal(&self, goal: NewFinancialGoal) -> Result<FinancialGoal, StoreError>;
    async fn goals_for(&self, user_id: Uuid) -> Result<Vec<FinancialGoal>, StoreError>;
}
