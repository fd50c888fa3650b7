//! Transaction service layer - owner-scoped expense management

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    CreateExpenseRequest, NewTransaction, Transaction, TransactionKind, UpdateExpenseRequest,
};
use crate::store::LedgerStore;

const RESOURCE: &str = "Transaction";

pub struct TransactionService {
    store: Arc<dyn LedgerStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Expenses owned by `user_id`, newest first
    pub async fn list_expenses(&self, user_id: Uuid) -> Result<Vec<Transaction>, ApiError> {
        Ok(self
            .store
            .list_transactions(user_id, TransactionKind::Expense)
            .await?)
    }

    pub async fn create_expense(
        &self,
        user_id: Uuid,
        request: CreateExpenseRequest,
    ) -> Result<Transaction, ApiError> {
        let transaction = self
            .store
            .insert_transaction(NewTransaction {
                user_id,
                kind: TransactionKind::Expense,
                category: request.category,
                amount: request.amount,
                description: request.description,
                date: request.date.unwrap_or_else(Utc::now),
            })
            .await?;

        tracing::info!(%user_id, transaction_id = %transaction.id, "expense created");
        Ok(transaction)
    }

    pub async fn update_expense(
        &self,
        user_id: Uuid,
        id: Uuid,
        request: UpdateExpenseRequest,
    ) -> Result<Transaction, ApiError> {
        let transaction = self
            .store
            .update_transaction(user_id, id, request.into())
            .await?
            .ok_or(ApiError::NotFound(RESOURCE))?;

        tracing::info!(%user_id, transaction_id = %id, "expense updated");
        Ok(transaction)
    }

    pub async fn delete_expense(&self, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        if !self.store.delete_transaction(user_id, id).await? {
            return Err(ApiError::NotFound(RESOURCE));
        }

        tracing::info!(%user_id, transaction_id = %id, "expense deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn create(category: &str, amount: f64) -> CreateExpenseRequest {
        CreateExpenseRequest {
            category: category.to_string(),
            amount,
            description: Some("lunch".to_string()),
            date: None,
        }
    }

    #[tokio::test]
    async fn created_expense_has_fixed_kind_and_owner() {
        let service = TransactionService::new(Arc::new(MemoryStore::new()));
        let user_id = Uuid::new_v4();

        let created = service
            .create_expense(user_id, create("Food", 50.0))
            .await
            .unwrap();

        assert_eq!(created.kind, TransactionKind::Expense);
        assert_eq!(created.user_id, user_id);
        assert_eq!(created.amount, 50.0);
    }

    #[tokio::test]
    async fn missing_or_foreign_records_are_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service = TransactionService::new(store.clone());
        let owner = Uuid::new_v4();
        let created = service
            .create_expense(owner, create("Food", 50.0))
            .await
            .unwrap();

        let stranger = Uuid::new_v4();
        let err = service
            .delete_expense(stranger, created.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound("Transaction")));

        let err = service
            .update_expense(owner, Uuid::new_v4(), UpdateExpenseRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        assert_eq!(store.transaction_count().await, 1);
    }
}
