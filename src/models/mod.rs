mod cash;
mod period;
mod stats;
mod transaction;

pub use cash::{CashCountPayload, Denomination, DenominationCount, DenominationKind, DENOMINATIONS};
pub use period::Period;
pub use stats::{CashSummary, CategoryStat, ChartData, DashboardStats, DetailedReport};
pub use transaction::{Category, Transaction, TransactionKind, TransactionPayload};
