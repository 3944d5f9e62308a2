mod cash_count_form;
mod dashboard;
mod home;
mod report;
mod transaction_form;
mod transactions;

pub use cash_count_form::CashCountModal;
pub use dashboard::DashboardScreen;
pub use home::HomeScreen;
pub use report::ReportScreen;
pub use transaction_form::TransactionFormModal;
pub use transactions::TransactionsScreen;
