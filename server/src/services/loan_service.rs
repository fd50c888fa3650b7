//! Loan service layer

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{CreateLoanRequest, Loan, NewLoan, UpdateLoanRequest};
use crate::store::LedgerStore;

const RESOURCE: &str = "Loan";

pub struct LoanService {
    store: Arc<dyn LedgerStore>,
}

impl LoanService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn list_loans(&self, user_id: Uuid) -> Result<Vec<Loan>, ApiError> {
        Ok(self.store.list_loans(user_id).await?)
    }

    pub async fn create_loan(
        &self,
        user_id: Uuid,
        request: CreateLoanRequest,
    ) -> Result<Loan, ApiError> {
        let loan = self
            .store
            .insert_loan(NewLoan {
                user_id,
                person_name: request.person_name,
                amount: request.amount,
                kind: request.kind,
                description: request.description,
                date: request.date.unwrap_or_else(Utc::now),
            })
            .await?;

        tracing::info!(%user_id, loan_id = %loan.id, kind = ?loan.kind, "loan recorded");
        Ok(loan)
    }

    pub async fn update_loan(
        &self,
        user_id: Uuid,
        id: Uuid,
        request: UpdateLoanRequest,
    ) -> Result<Loan, ApiError> {
        let loan = self
            .store
            .update_loan(user_id, id, request.into())
            .await?
            .ok_or(ApiError::NotFound(RESOURCE))?;

        tracing::info!(%user_id, loan_id = %id, "loan updated");
        Ok(loan)
    }

    pub async fn delete_loan(&self, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        if !self.store.delete_loan(user_id, id).await? {
            return Err(ApiError::NotFound(RESOURCE));
        }

        tracing::info!(%user_id, loan_id = %id, "loan deleted");
        Ok(())
    }
}
