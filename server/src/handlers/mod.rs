//! API handlers for the ledger backend

pub mod auth;
pub mod expense;
pub mod loan;
pub mod summary;

pub use auth::{login, register};
pub use expense::{create_expense, delete_expense, list_expenses, update_expense};
pub use loan::{create_loan, delete_loan, list_loans, update_loan};
pub use summary::get_summary;

pub async fn root() -> &'static str {
    "Ledger API Server"
}

pub async fn health_check() -> &'static str {
    "OK"
}
