use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::models::{
    ExpenseRecord, FinancialGoal, IncomeRecord, Investment, NewExpense, NewFinancialGoal,
    NewIncome, NewInvestment, NewSavingsGoal, NewUser, SavingsGoal, User,
};
use crate::database::store::{Store, StoreError};

/// In-memory store backing the integration tests.
///
/// Mirrors the Postgres contract: each write locks one collection, assigns
/// the id and any defaulted timestamp at insert time, and appends. Natural
/// order is insertion order.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    incomes: RwLock<Vec<IncomeRecord>>,
    expenses: RwLock<Vec<ExpenseRecord>>,
    savings: RwLock<Vec<SavingsGoal>>,
    investments: RwLock<Vec<Investment>>,
    goals: RwLock<Vec<FinancialGoal>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let created = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn add_income(&self, income: NewIncome) -> Result<IncomeRecord, StoreError> {
        let record = IncomeRecord {
            id: Uuid::new_v4(),
            user_id: income.user_id,
            source: income.source,
            amount: income.amount,
            date: Utc::now(),
        };
        self.incomes.write().await.push(record.clone());
        Ok(record)
    }

    async fn incomes_for(&self, user_id: Uuid) -> Result<Vec<IncomeRecord>, StoreError> {
        let incomes = self.incomes.read().await;
        Ok(incomes.iter().filter(|r| r.user_id == user_id).cloned().collect())
    }

    async fn add_expense(&self, expense: NewExpense) -> Result<ExpenseRecord, StoreError> {
        let record = ExpenseRecord {
            id: Uuid::new_v4(),
            user_id: expense.user_id,
            category: expense.category,
            amount: expense.amount,
            date: Utc::now(),
        };
        self.expenses.write().await.push(record.clone());
        Ok(record)
    }

    async fn expenses_for(&self, user_id: Uuid) -> Result<Vec<ExpenseRecord>, StoreError> {
        let expenses = self.expenses.read().await;
        Ok(expenses.iter().filter(|r| r.user_id == user_id).cloned().collect())
    }

    async fn add_savings_goal(&self, savings: NewSavingsGoal) -> Result<SavingsGoal, StoreError> {
        let record = SavingsGoal {
            id: Uuid::new_v4(),
            user_id: savings.user_id,
            goal: savings.goal,
            target_amount: savings.target_amount,
            current_amount: 0.0,
            deadline: savings.deadline,
        };
        self.savings.write().await.push(record.clone());
        Ok(record)
    }

    async fn savings_goals_for(&self, user_id: Uuid) -> Result<Vec<SavingsGoal>, StoreError> {
        let savings = self.savings.read().await;
        Ok(savings.iter().filter(|r| r.user_id == user_id).cloned().collect())
    }

    async fn add_investment(&self, investment: NewInvestment) -> Result<Investment, StoreError> {
        let record = Investment {
            id: Uuid::new_v4(),
            user_id: investment.user_id,
            investment_type: investment.investment_type,
            initial_amount: investment.initial_amount,
            current_value: investment.current_value,
        };
        self.investments.write().await.push(record.clone());
        Ok(record)
    }

    async fn investments_for(&self, user_id: Uuid) -> Result<Vec<Investment>, StoreError> {
        let investments = self.investments.read().await;
        Ok(investments.iter().filter(|r| r.user_id == user_id).cloned().collect())
    }

    async fn add_goal(&self, goal: NewFinancialGoal) -> Result<FinancialGoal, StoreError> {
        let record = FinancialGoal {
            id: Uuid::new_v4(),
            user_id: goal.user_id,
            goal: goal.goal,
            target_amount: goal.target_amount,
            current_amount: 0.0,
            deadline: goal.deadline,
        };
        self.goals.write().await.push(record.clone());
        Ok(record)
    }

    async fn goals_for(&self, user_id: Uuid) -> Result<Vec<FinancialGoal>, StoreError> {
        let goals = self.goals.read().await;
        Ok(goals.iter().filter(|r| r.user_id == user_id).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        let user = NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
        };
        store.create_user(user.clone()).await.expect("first insert");
        assert!(matches!(
            store.create_user(user).await,
            Err(StoreError::DuplicateEmail)
        ));
    }

    #[tokio::test]
    async fn listings_are_scoped_to_the_owner() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        for (user_id, source) in [(alice, "salary"), (bob, "freelance")] {
            store
                .add_income(NewIncome {
                    user_id,
                    source: source.to_string(),
                    amount: 100.0,
                })
                .await
                .expect("insert");
        }

        let mine = store.incomes_for(alice).await.expect("list");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].source, "salary");
        assert_eq!(mine[0].user_id, alice);
    }

    #[tokio::test]
    async fn insert_assigns_id_and_date() {
        let store = MemoryStore::new();
        let record = store
            .add_expense(NewExpense {
                user_id: Uuid::new_v4(),
                category: "groceries".to_string(),
                amount: 42.5,
            })
            .await
            .expect("insert");

        assert!(!record.id.is_nil());
        assert!(record.date <= Utc::now());
    }
}
