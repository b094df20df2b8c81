use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::database::models::{
    ExpenseRecord, FinancialGoal, IncomeRecord, Investment, NewExpense, NewFinancialGoal,
    NewIncome, NewInvestment, NewSavingsGoal, NewUser, SavingsGoal, User,
};
use crate::database::store::{Store, StoreError};

/// Postgres error code for a unique-constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Postgres-backed store. Ids (`gen_random_uuid()`) and default timestamps
/// (`now()`) are column defaults, so assignment happens at insert time inside
/// the database rather than in application code.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect and create the schema if it is not already there.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().connect(database_url).await?;
        info!("Created database pool");

        let store = Self { pool };
        store.bootstrap().await?;
        Ok(store)
    }

    async fn bootstrap(&self) -> Result<(), StoreError> {
        // One statement per call; prepared statements cannot batch DDL.
        for ddl in [
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS incomes (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                user_id UUID NOT NULL REFERENCES users(id),
                source TEXT NOT NULL,
                amount DOUBLE PRECISION NOT NULL,
                date TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS expenses (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                user_id UUID NOT NULL REFERENCES users(id),
                category TEXT NOT NULL,
                amount DOUBLE PRECISION NOT NULL,
                date TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS savings_goals (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                user_id UUID NOT NULL REFERENCES users(id),
                goal TEXT NOT NULL,
                target_amount DOUBLE PRECISION NOT NULL,
                current_amount DOUBLE PRECISION NOT NULL DEFAULT 0,
                deadline TIMESTAMPTZ NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS investments (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                user_id UUID NOT NULL REFERENCES users(id),
                investment_type TEXT NOT NULL,
                initial_amount DOUBLE PRECISION NOT NULL,
                current_value DOUBLE PRECISION NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS financial_goals (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                user_id UUID NOT NULL REFERENCES users(id),
                goal TEXT NOT NULL,
                target_amount DOUBLE PRECISION NOT NULL,
                current_amount DOUBLE PRECISION NOT NULL DEFAULT 0,
                deadline TIMESTAMPTZ NOT NULL
            )
            "#,
        ] {
            sqlx::query(ddl).execute(&self.pool).await?;
        }

        info!("Schema bootstrap complete");
        Ok(())
    }
}

fn map_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::DuplicateEmail;
        }
    }
    StoreError::Sqlx(err)
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn add_income(&self, income: NewIncome) -> Result<IncomeRecord, StoreError> {
        let record = sqlx::query_as::<_, IncomeRecord>(
            "INSERT INTO incomes (user_id, source, amount) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(income.user_id)
        .bind(&income.source)
        .bind(income.amount)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn incomes_for(&self, user_id: Uuid) -> Result<Vec<IncomeRecord>, StoreError> {
        let records =
            sqlx::query_as::<_, IncomeRecord>("SELECT * FROM incomes WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(records)
    }

    async fn add_expense(&self, expense: NewExpense) -> Result<ExpenseRecord, StoreError> {
        let record = sqlx::query_as::<_, ExpenseRecord>(
            "INSERT INTO expenses (user_id, category, amount) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(expense.user_id)
        .bind(&expense.category)
        .bind(expense.amount)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn expenses_for(&self, user_id: Uuid) -> Result<Vec<ExpenseRecord>, StoreError> {
        let records =
            sqlx::query_as::<_, ExpenseRecord>("SELECT * FROM expenses WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(records)
    }

    async fn add_savings_goal(&self, savings: NewSavingsGoal) -> Result<SavingsGoal, StoreError> {
        let record = sqlx::query_as::<_, SavingsGoal>(
            "INSERT INTO savings_goals (user_id, goal, target_amount, deadline) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(savings.user_id)
        .bind(&savings.goal)
        .bind(savings.target_amount)
        .bind(savings.deadline)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn savings_goals_for(&self, user_id: Uuid) -> Result<Vec<SavingsGoal>, StoreError> {
        let records =
            sqlx::query_as::<_, SavingsGoal>("SELECT * FROM savings_goals WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(records)
    }

    async fn add_investment(&self, investment: NewInvestment) -> Result<Investment, StoreError> {
        let record = sqlx::query_as::<_, Investment>(
            "INSERT INTO investments (user_id, investment_type, initial_amount, current_value) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(investment.user_id)
        .bind(&investment.investment_type)
        .bind(investment.initial_amount)
        .bind(investment.current_value)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn investments_for(&self, user_id: Uuid) -> Result<Vec<Investment>, StoreError> {
        let records =
            sqlx::query_as::<_, Investment>("SELECT * FROM investments WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(records)
    }

    async fn add_goal(&self, goal: NewFinancialGoal) -> Result<FinancialGoal, StoreError> {
        let record = sqlx::query_as::<_, FinancialGoal>(
            "INSERT INTO financial_goals (user_id, goal, target_amount, deadline) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(goal.user_id)
        .bind(&goal.goal)
        .bind(goal.target_amount)
        .bind(goal.deadline)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn goals_for(&self, user_id: Uuid) -> Result<Vec<FinancialGoal>, StoreError> {
        let records =
            sqlx::query_as::<_, FinancialGoal>("SELECT * FROM financial_goals WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(records)
    }
}
