//! Business logic services for the ledger server

mod loan_service;
mod summary_service;
mod transaction_service;

pub use loan_service::LoanService;
pub use summary_service::{summarize, SummaryService};
pub use transaction_service::TransactionService;
