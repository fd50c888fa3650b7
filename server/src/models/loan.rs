use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// Peer-to-peer loan record owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub person_name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: LoanKind,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Direction of the loan relative to the owner
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "loan_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LoanKind {
    Given,
    Received,
}

#[derive(Debug, Clone)]
pub struct NewLoan {
    pub user_id: Uuid,
    pub person_name: String,
    pub amount: f64,
    pub kind: LoanKind,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

/// Request DTO for recording a loan
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    #[validate(length(min = 1, message = "personName is required"))]
    pub person_name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: LoanKind,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Request DTO for editing a loan; absent fields keep their stored value
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoanRequest {
    #[validate(length(min = 1, message = "personName must not be empty"))]
    pub person_name: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<LoanKind>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LoanChanges {
    pub person_name: Option<String>,
    pub amount: Option<f64>,
    pub kind: Option<LoanKind>,
    pub description: Option<String>,
}

impl From<UpdateLoanRequest> for LoanChanges {
    fn from(request: UpdateLoanRequest) -> Self {
        Self {
            person_name: request.person_name,
            amount: request.amount,
            kind: request.kind,
            description: request.description,
        }
    }
}

impl LoanChanges {
    pub fn apply(self, loan: &mut Loan) {
        if let Some(person_name) = self.person_name {
            loan.person_name = person_name;
        }
        if let Some(amount) = self.amount {
            loan.amount = amount;
        }
        if let Some(kind) = self.kind {
            loan.kind = kind;
        }
        if let Some(description) = self.description {
            loan.description = Some(description);
        }
    }
}
