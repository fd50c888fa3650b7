use axum::{routing::get, routing::put, Router};

use crate::app_state::AppState;
use crate::handlers::{create_expense, delete_expense, list_expenses, update_expense};

pub fn expense_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/:id", put(update_expense).delete(delete_expense))
}
