use std::sync::Arc;

use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::models::{AuthUser, Summary};
use crate::services::SummaryService;

/// Chart-ready totals for the caller's expenses and loans
pub async fn get_summary(
    State(summary_service): State<Arc<SummaryService>>,
    user: AuthUser,
) -> Result<Json<Summary>, ApiError> {
    summary_service.summary(user.id).await.map(Json)
}
