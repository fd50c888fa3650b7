//! Ledger Backend Library
//!
//! Personal finance tracking API: accounts, expenses, peer loans and a
//! dashboard summary, each scoped to the authenticated user.

pub mod app_state;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use app_state::AppState;
pub use config::Settings;
pub use error::ApiError;
pub use routes::build_router;
