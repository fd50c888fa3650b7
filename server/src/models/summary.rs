use serde::Serialize;

/// Aggregated view backing the dashboard charts
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_expenses: f64,
    /// Expenses dated on the current UTC day
    pub today_total: f64,
    /// Expenses dated in the current UTC month
    pub month_total: f64,
    pub by_category: Vec<CategoryTotal>,
    pub by_day: Vec<DailyTotal>,
    pub loans: LoanTotals,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Expense total for one UTC calendar day (`YYYY-MM-DD`)
#[derive(Debug, Serialize, PartialEq)]
pub struct DailyTotal {
    pub date: String,
    pub total: f64,
}

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct LoanTotals {
    pub given: f64,
    pub received: f64,
    pub net: f64,
}
