use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiError;
use crate::extract::{parse_record_id, ValidatedJson};
use crate::models::{
    AuthUser, CreateExpenseRequest, MessageResponse, Transaction, UpdateExpenseRequest,
};
use crate::services::TransactionService;

const RESOURCE: &str = "Transaction";

/// List the caller's expenses, newest first
pub async fn list_expenses(
    State(transaction_service): State<Arc<TransactionService>>,
    user: AuthUser,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    transaction_service.list_expenses(user.id).await.map(Json)
}

/// Add a new expense
pub async fn create_expense(
    State(transaction_service): State<Arc<TransactionService>>,
    user: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateExpenseRequest>,
) -> Result<Json<Transaction>, ApiError> {
    transaction_service
        .create_expense(user.id, payload)
        .await
        .map(Json)
}

/// Edit an expense owned by the caller
pub async fn update_expense(
    State(transaction_service): State<Arc<TransactionService>>,
    user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateExpenseRequest>,
) -> Result<Json<Transaction>, ApiError> {
    let id = parse_record_id(&id, RESOURCE)?;
    transaction_service
        .update_expense(user.id, id, payload)
        .await
        .map(Json)
}

/// Delete an expense owned by the caller
pub async fn delete_expense(
    State(transaction_service): State<Arc<TransactionService>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_record_id(&id, RESOURCE)?;
    transaction_service.delete_expense(user.id, id).await?;

    Ok(Json(MessageResponse::new("Transaction deleted successfully")))
}
