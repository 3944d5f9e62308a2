//! Grouped dashboard fetches. Each group's two calls run together and are
//! applied all-or-nothing: if either fails, the previous view state stays in
//! place for that cycle.

use crate::api::{self, ApiError};
use crate::models::{CategoryStat, ChartData, DashboardStats, Period, TransactionKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Overview {
    pub stats: DashboardStats,
    pub chart: ChartData,
}

/// Stats cards + chart series for the selected period.
pub async fn load_overview(period: Period) -> Result<Overview, ApiError> {
    let (stats, chart) = futures::join!(api::dashboard_stats(period), api::chart_data(period));
    Ok(Overview {
        stats: stats?,
        chart: chart?,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBreakdown {
    pub income: Vec<CategoryStat>,
    pub expense: Vec<CategoryStat>,
}

/// Income and expense category breakdowns for the selected period.
pub async fn load_category_breakdown(period: Period) -> Result<CategoryBreakdown, ApiError> {
    let (income, expense) = futures::join!(
        api::category_stats(period, TransactionKind::Income),
        api::category_stats(period, TransactionKind::Expense),
    );
    Ok(CategoryBreakdown {
        income: income?,
        expense: expense?,
    })
}
