use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiError;
use crate::extract::{parse_record_id, ValidatedJson};
use crate::models::{AuthUser, CreateLoanRequest, Loan, MessageResponse, UpdateLoanRequest};
use crate::services::LoanService;

const RESOURCE: &str = "Loan";

pub async fn list_loans(
    State(loan_service): State<Arc<LoanService>>,
    user: AuthUser,
) -> Result<Json<Vec<Loan>>, ApiError> {
    loan_service.list_loans(user.id).await.map(Json)
}

pub async fn create_loan(
    State(loan_service): State<Arc<LoanService>>,
    user: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateLoanRequest>,
) -> Result<Json<Loan>, ApiError> {
    loan_service.create_loan(user.id, payload).await.map(Json)
}

pub async fn update_loan(
    State(loan_service): State<Arc<LoanService>>,
    user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateLoanRequest>,
) -> Result<Json<Loan>, ApiError> {
    let id = parse_record_id(&id, RESOURCE)?;
    loan_service.update_loan(user.id, id, payload).await.map(Json)
}

pub async fn delete_loan(
    State(loan_service): State<Arc<LoanService>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_record_id(&id, RESOURCE)?;
    loan_service.delete_loan(user.id, id).await?;

    Ok(Json(MessageResponse::new("Loan deleted successfully")))
}
