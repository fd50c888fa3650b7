use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// Income or expense record owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Transaction kinds
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "transaction_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

/// Row to insert; built by the service from a create request
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: Uuid,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

/// Request DTO for adding an expense
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Request DTO for editing an expense; absent fields keep their stored value
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateExpenseRequest {
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

/// Column changes applied by an owner-scoped update
#[derive(Debug, Clone, Default)]
pub struct TransactionChanges {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}

impl From<UpdateExpenseRequest> for TransactionChanges {
    fn from(request: UpdateExpenseRequest) -> Self {
        Self {
            category: request.category,
            amount: request.amount,
            description: request.description,
        }
    }
}

impl TransactionChanges {
    pub fn apply(self, transaction: &mut Transaction) {
        if let Some(category) = self.category {
            transaction.category = category;
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(description) = self.description {
            transaction.description = Some(description);
        }
    }
}
