//! Persistence layer
//!
//! `LedgerStore` is the single seam between services and storage. Every
//! record query is scoped by the owning user id; update and delete only
//! touch a row when both id and owner match.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    Loan, LoanChanges, NewLoan, NewTransaction, NewUser, Transaction, TransactionChanges,
    TransactionKind, User,
};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("email is already registered")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Insert a user; fails with `DuplicateEmail` if the email is taken.
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn user_exists(&self, id: Uuid) -> StoreResult<bool>;

    /// Transactions of one kind owned by `user_id`, newest `date` first.
    async fn list_transactions(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
    ) -> StoreResult<Vec<Transaction>>;

    async fn insert_transaction(&self, transaction: NewTransaction) -> StoreResult<Transaction>;

    /// Returns `None` when no row with `id` is owned by `user_id`.
    async fn update_transaction(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: TransactionChanges,
    ) -> StoreResult<Option<Transaction>>;

    /// Returns `false` when no row with `id` is owned by `user_id`.
    async fn delete_transaction(&self, user_id: Uuid, id: Uuid) -> StoreResult<bool>;

    /// Loans owned by `user_id`, newest `date` first.
    async fn list_loans(&self, user_id: Uuid) -> StoreResult<Vec<Loan>>;

    async fn insert_loan(&self, loan: NewLoan) -> StoreResult<Loan>;

    async fn update_loan(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: LoanChanges,
    ) -> StoreResult<Option<Loan>>;

    async fn delete_loan(&self, user_id: Uuid, id: Uuid) -> StoreResult<bool>;
}
