//! Middleware for the ledger API

mod auth;

pub use auth::require_auth;
