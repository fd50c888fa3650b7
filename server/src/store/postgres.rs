use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use super::{LedgerStore, StoreError, StoreResult};
use crate::models::{
    Loan, LoanChanges, NewLoan, NewTransaction, NewUser, Transaction, TransactionChanges,
    TransactionKind, User,
};

/// Postgres unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Postgres-backed store
pub struct PgStore {
    db_pool: PgPool,
}

impl PgStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Open a pool and bring the schema up to date
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&db_pool).await?;
        tracing::info!("database migrations applied");

        Ok(Self::new(db_pool))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .map(|code| code == UNIQUE_VIOLATION)
        .unwrap_or(false)
}

#[async_trait]
impl LedgerStore for PgStore {
    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.db_pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(user)
    }

    async fn user_exists(&self, id: Uuid) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(exists)
    }

    async fn list_transactions(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
    ) -> StoreResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT * FROM transactions
            WHERE user_id = $1 AND kind = $2
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .bind(kind)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(transactions)
    }

    async fn insert_transaction(&self, transaction: NewTransaction) -> StoreResult<Transaction> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                id, user_id, kind, category, amount, description, date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(transaction.user_id)
        .bind(transaction.kind)
        .bind(&transaction.category)
        .bind(transaction.amount)
        .bind(&transaction.description)
        .bind(transaction.date)
        .bind(Utc::now())
        .fetch_one(&self.db_pool)
        .await?;

        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: TransactionChanges,
    ) -> StoreResult<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            UPDATE transactions
            SET category = COALESCE($3, category),
                amount = COALESCE($4, amount),
                description = COALESCE($5, description)
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.category)
        .bind(changes.amount)
        .bind(changes.description)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(transaction)
    }

    async fn delete_transaction(&self, user_id: Uuid, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.db_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_loans(&self, user_id: Uuid) -> StoreResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE user_id = $1 ORDER BY date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(loans)
    }

    async fn insert_loan(&self, loan: NewLoan) -> StoreResult<Loan> {
        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (
                id, user_id, person_name, amount, kind, description, date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(loan.user_id)
        .bind(&loan.person_name)
        .bind(loan.amount)
        .bind(loan.kind)
        .bind(&loan.description)
        .bind(loan.date)
        .bind(Utc::now())
        .fetch_one(&self.db_pool)
        .await?;

        Ok(loan)
    }

    async fn update_loan(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: LoanChanges,
    ) -> StoreResult<Option<Loan>> {
        let loan = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans
            SET person_name = COALESCE($3, person_name),
                amount = COALESCE($4, amount),
                kind = COALESCE($5, kind),
                description = COALESCE($6, description)
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.person_name)
        .bind(changes.amount)
        .bind(changes.kind)
        .bind(changes.description)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(loan)
    }

    async fn delete_loan(&self, user_id: Uuid, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM loans WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.db_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
