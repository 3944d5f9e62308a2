//! Transaction form state machine tests: open/edit defaults, kind and
//! category coupling, validation, and the submit lifecycle.

use chrono::{TimeZone, Utc};
use finanzas_frontend::form::{FormStatus, TransactionForm, ValidationError};
use finanzas_frontend::models::{Category, Transaction, TransactionKind};
use pretty_assertions::assert_eq;

fn sample_transaction() -> Transaction {
    Transaction {
        id: "tx-42".to_string(),
        kind: TransactionKind::Income,
        amount: 150_000.0,
        category: Category::Salary,
        description: Some("August payroll".to_string()),
        date: Utc.with_ymd_and_hms(2026, 8, 15, 9, 30, 0).unwrap(),
    }
}

#[test]
fn open_blank_starts_editing_with_expense_defaults() {
    let form = TransactionForm::open_blank(Utc.with_ymd_and_hms(2026, 8, 25, 10, 0, 0).unwrap());
    assert_eq!(form.status, FormStatus::Editing);
    assert_eq!(form.kind, TransactionKind::Expense);
    assert_eq!(form.category, Category::OtherExpense);
    assert_eq!(form.amount, "");
    assert_eq!(form.description, "");
    assert_eq!(form.date, "2026-08-25T10:00");
    assert!(!form.is_edit());
}

#[test]
fn open_edit_carries_identity_and_fields() {
    let form = TransactionForm::open_edit(&sample_transaction());
    assert_eq!(form.status, FormStatus::Editing);
    assert!(form.is_edit());
    assert_eq!(form.id.as_deref(), Some("tx-42"));
    assert_eq!(form.kind, TransactionKind::Income);
    assert_eq!(form.category, Category::Salary);
    assert_eq!(form.amount, "150000");
    assert_eq!(form.description, "August payroll");
    assert_eq!(form.date, "2026-08-15T09:30");
}

#[test]
fn kind_change_resets_category_in_both_directions() {
    let mut form = TransactionForm::open_blank(Utc::now());
    form.set_category(Category::Food);
    assert_eq!(form.category, Category::Food);

    form.set_kind(TransactionKind::Income);
    assert_eq!(form.category, Category::OtherIncome);

    form.set_category(Category::Freelance);
    form.set_kind(TransactionKind::Expense);
    assert_eq!(form.category, Category::OtherExpense);
}

#[test]
fn kind_change_resets_even_to_same_kind() {
    let mut form = TransactionForm::open_blank(Utc::now());
    form.set_category(Category::Transport);
    form.set_kind(TransactionKind::Expense);
    assert_eq!(form.category, Category::OtherExpense);
}

#[test]
fn category_from_the_other_kind_is_rejected() {
    let mut form = TransactionForm::open_blank(Utc::now());
    assert_eq!(form.kind, TransactionKind::Expense);
    form.set_category(Category::Salary);
    assert_eq!(form.category, Category::OtherExpense);
}

#[test]
fn empty_amount_fails_validation() {
    let mut form = TransactionForm::open_blank(Utc::now());
    assert_eq!(form.validate(), Err(ValidationError::MissingAmount));
    form.amount = "   ".to_string();
    assert_eq!(form.validate(), Err(ValidationError::MissingAmount));
    assert_eq!(form.status, FormStatus::Editing);
}

#[test]
fn zero_negative_and_garbage_amounts_fail_validation() {
    let mut form = TransactionForm::open_blank(Utc::now());
    for bad in ["0", "-10", "abc", "12,5"] {
        form.amount = bad.to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidAmount), "{bad}");
    }
    assert_eq!(form.status, FormStatus::Editing);
}

#[test]
fn valid_form_builds_payload() {
    let mut form = TransactionForm::open_blank(Utc::now());
    form.set_kind(TransactionKind::Income);
    form.set_category(Category::Sales);
    form.amount = "25000.5".to_string();
    form.description = "  market stall  ".to_string();
    form.date = "2026-08-20T14:45".to_string();

    let payload = form.validate().unwrap();
    assert_eq!(payload.kind, TransactionKind::Income);
    assert_eq!(payload.category, Category::Sales);
    assert_eq!(payload.amount, 25000.5);
    assert_eq!(payload.description.as_deref(), Some("market stall"));
    assert_eq!(
        payload.date,
        Utc.with_ymd_and_hms(2026, 8, 20, 14, 45, 0).unwrap()
    );
}

#[test]
fn blank_description_becomes_none() {
    let mut form = TransactionForm::open_blank(Utc::now());
    form.amount = "100".to_string();
    form.description = "   ".to_string();
    let payload = form.validate().unwrap();
    assert_eq!(payload.description, None);
}

#[test]
fn failed_submit_returns_to_editing_with_fields_intact() {
    let mut form = TransactionForm::open_edit(&sample_transaction());
    form.amount = "99000".to_string();
    form.description = "corrected".to_string();

    form.begin_submit();
    assert_eq!(form.status, FormStatus::Submitting);

    let before = form.clone();
    form.submit_failed();
    assert_eq!(form.status, FormStatus::Editing);
    assert_eq!(form.amount, before.amount);
    assert_eq!(form.description, before.description);
    assert_eq!(form.id, before.id);
    assert_eq!(form.kind, before.kind);
    assert_eq!(form.category, before.category);
    assert_eq!(form.date, before.date);
}

#[test]
fn close_resets_to_idle_defaults() {
    let mut form = TransactionForm::open_edit(&sample_transaction());
    form.begin_submit();
    form.close();
    assert_eq!(form, TransactionForm::idle());
    assert_eq!(form.status, FormStatus::Idle);
}

#[test]
fn fractional_edit_amount_keeps_decimals() {
    let mut t = sample_transaction();
    t.amount = 1250.75;
    let form = TransactionForm::open_edit(&t);
    assert_eq!(form.amount, "1250.75");
}
