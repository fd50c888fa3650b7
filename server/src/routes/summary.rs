use axum::{routing::get, Router};

use crate::app_state::AppState;
use crate::handlers::get_summary;

pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/summary", get(get_summary))
}
