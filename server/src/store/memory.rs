use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{LedgerStore, StoreError, StoreResult};
use crate::models::{
    Loan, LoanChanges, NewLoan, NewTransaction, NewUser, Transaction, TransactionChanges,
    TransactionKind, User,
};

/// In-process store used when no database is configured, and by tests
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    transactions: RwLock<HashMap<Uuid, Transaction>>,
    loans: RwLock<HashMap<Uuid, Loan>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn transaction_count(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub async fn loan_count(&self) -> usize {
        self.loans.read().await.len()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn user_exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.users.read().await.contains_key(&id))
    }

    async fn list_transactions(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
    ) -> StoreResult<Vec<Transaction>> {
        let transactions = self.transactions.read().await;
        let mut owned: Vec<Transaction> = transactions
            .values()
            .filter(|t| t.user_id == user_id && t.kind == kind)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(owned)
    }

    async fn insert_transaction(&self, transaction: NewTransaction) -> StoreResult<Transaction> {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            user_id: transaction.user_id,
            kind: transaction.kind,
            category: transaction.category,
            amount: transaction.amount,
            description: transaction.description,
            date: transaction.date,
            created_at: Utc::now(),
        };
        self.transactions
            .write()
            .await
            .insert(transaction.id, transaction.clone());
        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: TransactionChanges,
    ) -> StoreResult<Option<Transaction>> {
        let mut transactions = self.transactions.write().await;
        match transactions.get_mut(&id) {
            Some(transaction) if transaction.user_id == user_id => {
                changes.apply(transaction);
                Ok(Some(transaction.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_transaction(&self, user_id: Uuid, id: Uuid) -> StoreResult<bool> {
        let mut transactions = self.transactions.write().await;
        let owned = transactions
            .get(&id)
            .map(|t| t.user_id == user_id)
            .unwrap_or(false);
        if owned {
            transactions.remove(&id);
        }
        Ok(owned)
    }

    async fn list_loans(&self, user_id: Uuid) -> StoreResult<Vec<Loan>> {
        let loans = self.loans.read().await;
        let mut owned: Vec<Loan> = loans
            .values()
            .filter(|loan| loan.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(owned)
    }

    async fn insert_loan(&self, loan: NewLoan) -> StoreResult<Loan> {
        let loan = Loan {
            id: Uuid::new_v4(),
            user_id: loan.user_id,
            person_name: loan.person_name,
            amount: loan.amount,
            kind: loan.kind,
            description: loan.description,
            date: loan.date,
            created_at: Utc::now(),
        };
        self.loans.write().await.insert(loan.id, loan.clone());
        Ok(loan)
    }

    async fn update_loan(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: LoanChanges,
    ) -> StoreResult<Option<Loan>> {
        let mut loans = self.loans.write().await;
        match loans.get_mut(&id) {
            Some(loan) if loan.user_id == user_id => {
                changes.apply(loan);
                Ok(Some(loan.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_loan(&self, user_id: Uuid, id: Uuid) -> StoreResult<bool> {
        let mut loans = self.loans.write().await;
        let owned = loans
            .get(&id)
            .map(|loan| loan.user_id == user_id)
            .unwrap_or(false);
        if owned {
            loans.remove(&id);
        }
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::LoanKind;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Alice".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    fn expense(user_id: Uuid, amount: f64, days_ago: i64) -> NewTransaction {
        NewTransaction {
            user_id,
            kind: TransactionKind::Expense,
            category: "Food".to_string(),
            amount,
            description: None,
            date: Utc::now() - Duration::days(days_ago),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        store.create_user(new_user("a@x.com")).await.unwrap();

        let err = store.create_user(new_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn user_exists_only_for_registered_ids() {
        let store = MemoryStore::new();
        let user = store.create_user(new_user("a@x.com")).await.unwrap();

        assert!(store.user_exists(user.id).await.unwrap());
        assert!(!store.user_exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn list_filters_by_owner_and_kind_newest_first() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.insert_transaction(expense(alice, 1.0, 3)).await.unwrap();
        store.insert_transaction(expense(alice, 2.0, 1)).await.unwrap();
        store.insert_transaction(expense(bob, 9.0, 0)).await.unwrap();
        let mut income = expense(alice, 100.0, 0);
        income.kind = TransactionKind::Income;
        store.insert_transaction(income).await.unwrap();

        let listed = store
            .list_transactions(alice, TransactionKind::Expense)
            .await
            .unwrap();
        let amounts: Vec<f64> = listed.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![2.0, 1.0]);
    }

    #[tokio::test]
    async fn foreign_owner_cannot_update_or_delete() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let created = store.insert_transaction(expense(alice, 5.0, 0)).await.unwrap();

        let changes = TransactionChanges {
            amount: Some(500.0),
            ..Default::default()
        };
        assert!(store
            .update_transaction(bob, created.id, changes)
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete_transaction(bob, created.id).await.unwrap());

        let listed = store
            .list_transactions(alice, TransactionKind::Expense)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].amount, 5.0);
    }

    #[tokio::test]
    async fn partial_loan_update_keeps_untouched_fields() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let loan = store
            .insert_loan(NewLoan {
                user_id: alice,
                person_name: "Bob".to_string(),
                amount: 20.0,
                kind: LoanKind::Given,
                description: Some("cab".to_string()),
                date: Utc::now(),
            })
            .await
            .unwrap();

        let updated = store
            .update_loan(
                alice,
                loan.id,
                LoanChanges {
                    kind: Some(LoanKind::Received),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.kind, LoanKind::Received);
        assert_eq!(updated.person_name, "Bob");
        assert_eq!(updated.amount, 20.0);
        assert_eq!(updated.description.as_deref(), Some("cab"));
    }
}
