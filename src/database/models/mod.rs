pub mod expense;
pub mod goal;
pub mod income;
pub mod investment;
pub mod savings;
pub mod user;

pub use expense::{ExpenseRecord, NewExpense};
pub use goal::{FinancialGoal, NewFinancialGoal};
pub use income::{IncomeRecord, NewIncome};
pub use investment::{Investment, InvestmentReturn, NewInvestment};
pub use savings::{NewSavingsGoal, SavingsGoal};
pub use user::{NewUser, User};
