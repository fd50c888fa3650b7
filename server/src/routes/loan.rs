use axum::{routing::get, routing::put, Router};

use crate::app_state::AppState;
use crate::handlers::{create_loan, delete_loan, list_loans, update_loan};

pub fn loan_routes() -> Router<AppState> {
    Router::new()
        .route("/loans", get(list_loans).post(create_loan))
        .route("/loans/:id", put(update_loan).delete(delete_loan))
}
