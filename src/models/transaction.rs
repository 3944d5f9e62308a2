use serde::{Deserialize, Serialize};

use crate::format;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Wire form, used as a URL path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

/// Transaction category. The valid set is restricted by the transaction kind;
/// `Category::kind` gives the owning side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Income
    Salary,
    Freelance,
    Sales,
    Investments,
    CashCounted,
    OtherIncome,
    // Expense
    Food,
    Transport,
    Housing,
    Entertainment,
    Health,
    Education,
    Shopping,
    Services,
    OtherExpense,
}

static INCOME_CATEGORIES: [Category; 6] = [
    Category::Salary,
    Category::Freelance,
    Category::Sales,
    Category::Investments,
    Category::CashCounted,
    Category::OtherIncome,
];

static EXPENSE_CATEGORIES: [Category; 9] = [
    Category::Food,
    Category::Transport,
    Category::Housing,
    Category::Entertainment,
    Category::Health,
    Category::Education,
    Category::Shopping,
    Category::Services,
    Category::OtherExpense,
];

impl Category {
    pub fn kind(self) -> TransactionKind {
        if INCOME_CATEGORIES.contains(&self) {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    /// Fallback category a form resets to when the kind changes.
    pub fn default_for(kind: TransactionKind) -> Category {
        match kind {
            TransactionKind::Income => Category::OtherIncome,
            TransactionKind::Expense => Category::OtherExpense,
        }
    }

    pub fn all_for(kind: TransactionKind) -> &'static [Category] {
        match kind {
            TransactionKind::Income => &INCOME_CATEGORIES,
            TransactionKind::Expense => &EXPENSE_CATEGORIES,
        }
    }

    /// Wire form, matches the serde rename.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Freelance => "freelance",
            Category::Sales => "sales",
            Category::Investments => "investments",
            Category::CashCounted => "cash_counted",
            Category::OtherIncome => "other_income",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Housing => "housing",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Education => "education",
            Category::Shopping => "shopping",
            Category::Services => "services",
            Category::OtherExpense => "other_expense",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Sales => "Sales",
            Category::Investments => "Investments",
            Category::CashCounted => "Cash counted",
            Category::OtherIncome => "Other income",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Shopping => "Shopping",
            Category::Services => "Services",
            Category::OtherExpense => "Other expense",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: Category,
    pub description: Option<String>,
    pub date: chrono::DateTime<chrono::Utc>,
}

impl Transaction {
    pub fn formatted_amount(&self) -> String {
        format::format_cop(self.amount)
    }
}

/// Body of a create or update call. The backend assigns the identity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionPayload {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: Category,
    pub description: Option<String>,
    pub date: chrono::DateTime<chrono::Utc>,
}
