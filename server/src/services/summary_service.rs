//! Dashboard aggregation over a user's expenses and loans

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    CategoryTotal, DailyTotal, Loan, LoanKind, LoanTotals, Summary, Transaction, TransactionKind,
};
use crate::store::LedgerStore;

pub struct SummaryService {
    store: Arc<dyn LedgerStore>,
}

impl SummaryService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    pub async fn summary(&self, user_id: Uuid) -> Result<Summary, ApiError> {
        let expenses = self
            .store
            .list_transactions(user_id, TransactionKind::Expense)
            .await?;
        let loans = self.store.list_loans(user_id).await?;

        Ok(summarize(&expenses, &loans, Utc::now()))
    }
}

/// Category totals descend by amount (ties by name); daily totals ascend by day.
/// Today and month totals use UTC calendar boundaries relative to `now`.
pub fn summarize(expenses: &[Transaction], loans: &[Loan], now: DateTime<Utc>) -> Summary {
    let mut categories: BTreeMap<&str, f64> = BTreeMap::new();
    let mut days: BTreeMap<String, f64> = BTreeMap::new();
    let mut today_total = 0.0;
    let mut month_total = 0.0;

    for expense in expenses {
        if expense.date.year() == now.year() && expense.date.month() == now.month() {
            month_total += expense.amount;
            if expense.date.day() == now.day() {
                today_total += expense.amount;
            }
        }
        *categories.entry(expense.category.as_str()).or_default() += expense.amount;
        *days
            .entry(expense.date.format("%Y-%m-%d").to_string())
            .or_default() += expense.amount;
    }

    let mut by_category: Vec<CategoryTotal> = categories
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();
    // stable sort keeps the BTreeMap's name order among equal totals
    by_category.sort_by(|a, b| b.total.total_cmp(&a.total));

    let by_day = days
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect();

    let mut totals = LoanTotals::default();
    for loan in loans {
        match loan.kind {
            LoanKind::Given => totals.given += loan.amount,
            LoanKind::Received => totals.received += loan.amount,
        }
    }
    totals.net = totals.given - totals.received;

    Summary {
        total_expenses: expenses.iter().map(|e| e.amount).sum(),
        today_total,
        month_total,
        by_category,
        by_day,
        loans: totals,
    }
}
