//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::{AuthService, TokenKeys};
use crate::config::Settings;
use crate::services::{LoanService, SummaryService, TransactionService};
use crate::store::LedgerStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub transaction_service: Arc<TransactionService>,
    pub loan_service: Arc<LoanService>,
    pub summary_service: Arc<SummaryService>,
}

impl AppState {
    /// Wire every service onto one store handle
    pub fn new(store: Arc<dyn LedgerStore>, settings: &Settings) -> Self {
        let keys = TokenKeys::new(&settings.jwt_secret, settings.token_ttl_hours);

        Self {
            auth_service: Arc::new(AuthService::new(
                store.clone(),
                keys,
                settings.bcrypt_cost,
            )),
            transaction_service: Arc::new(TransactionService::new(store.clone())),
            loan_service: Arc::new(LoanService::new(store.clone())),
            summary_service: Arc::new(SummaryService::new(store)),
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<TransactionService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.transaction_service.clone()
    }
}

impl FromRef<AppState> for Arc<LoanService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.loan_service.clone()
    }
}

impl FromRef<AppState> for Arc<SummaryService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.summary_service.clone()
    }
}
