use serde::{Deserialize, Serialize};

use super::period::Period;
use super::transaction::{Category, Transaction};

/// Totals for the selected period, computed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub period: Period,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// Parallel arrays: one income and one expense value per label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

/// One row of a category breakdown, sorted by total descending on the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: Category,
    pub total: f64,
    pub percentage: f64,
}

/// Most recent cash count aggregate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CashSummary {
    pub total_bills: i64,
    pub total_coins: i64,
}

impl CashSummary {
    pub fn total_cash(&self) -> i64 {
        self.total_bills + self.total_coins
    }
}

/// Pre-aggregated report bundle for print rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailedReport {
    pub stats: DashboardStats,
    pub income_categories: Vec<CategoryStat>,
    pub expense_categories: Vec<CategoryStat>,
    pub recent_transactions: Vec<Transaction>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
