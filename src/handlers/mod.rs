pub mod auth;
pub mod expenses;
pub mod goals;
pub mod income;
pub mod investments;
pub mod savings;
