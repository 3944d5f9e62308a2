//! Transaction form state machine: a pure reducer struct, independent of any
//! rendering mechanism. Idle -> Editing -> Submitting -> Idle (success) or
//! back to Editing with all fields intact (failure).

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::format;
use crate::models::{Category, Transaction, TransactionKind, TransactionPayload};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Editing,
    Submitting,
}

/// Caught before any network call; surfaced inline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter an amount")]
    MissingAmount,
    #[error("Amount must be a number greater than zero")]
    InvalidAmount,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionForm {
    pub status: FormStatus,
    /// Backend identity; present only when editing an existing transaction.
    pub id: Option<String>,
    pub kind: TransactionKind,
    pub amount: String,
    pub category: Category,
    pub description: String,
    /// `datetime-local` editable representation.
    pub date: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::idle()
    }
}

impl TransactionForm {
    pub fn idle() -> Self {
        TransactionForm {
            status: FormStatus::Idle,
            id: None,
            kind: TransactionKind::Expense,
            amount: String::new(),
            category: Category::OtherExpense,
            description: String::new(),
            date: String::new(),
        }
    }

    /// Open for a new transaction: expense defaults, timestamp = now.
    pub fn open_blank(now: DateTime<Utc>) -> Self {
        TransactionForm {
            status: FormStatus::Editing,
            date: format::datetime_local_value(&now),
            ..Self::idle()
        }
    }

    /// Open populated from an existing transaction, carrying its identity.
    pub fn open_edit(transaction: &Transaction) -> Self {
        TransactionForm {
            status: FormStatus::Editing,
            id: Some(transaction.id.clone()),
            kind: transaction.kind,
            amount: editable_amount(transaction.amount),
            category: transaction.category,
            description: transaction.description.clone().unwrap_or_default(),
            date: format::datetime_local_value(&transaction.date),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Changing the kind always resets the category to that kind's default,
    /// so a mismatched kind/category pair is never reachable.
    pub fn set_kind(&mut self, kind: TransactionKind) {
        self.kind = kind;
        self.category = Category::default_for(kind);
    }

    /// A category from the other kind's set is rejected.
    pub fn set_category(&mut self, category: Category) {
        if category.kind() == self.kind {
            self.category = category;
        }
    }

    /// Validate and build the submission body. Does not change state: a
    /// validation failure leaves the form in `Editing` with fields intact.
    pub fn validate(&self) -> Result<TransactionPayload, ValidationError> {
        let raw = self.amount.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount: f64 = raw.parse().map_err(|_| ValidationError::InvalidAmount)?;
        if !(amount > 0.0) {
            return Err(ValidationError::InvalidAmount);
        }
        let description = self.description.trim();
        Ok(TransactionPayload {
            kind: self.kind,
            amount,
            category: self.category,
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            date: format::parse_datetime_local(&self.date).unwrap_or_else(Utc::now),
        })
    }

    pub fn begin_submit(&mut self) {
        self.status = FormStatus::Submitting;
    }

    /// Failed create/update: back to editing, every field retained for retry.
    pub fn submit_failed(&mut self) {
        self.status = FormStatus::Editing;
    }

    /// Successful submit or cancel: back to idle defaults.
    pub fn close(&mut self) {
        *self = Self::idle();
    }
}

fn editable_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        amount.to_string()
    }
}
