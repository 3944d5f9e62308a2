//! Wire-format tests: the serde names the backend contract expects.

use chrono::{TimeZone, Utc};
use finanzas_frontend::models::{
    Category, Period, Transaction, TransactionKind, TransactionPayload,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn period_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Period::Daily).unwrap(), json!("daily"));
    assert_eq!(serde_json::to_value(Period::Weekly).unwrap(), json!("weekly"));
    assert_eq!(serde_json::to_value(Period::Monthly).unwrap(), json!("monthly"));
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(TransactionKind::Income).unwrap(), json!("income"));
    assert_eq!(serde_json::to_value(TransactionKind::Expense).unwrap(), json!("expense"));
}

#[test]
fn category_wire_names_match_as_str() {
    for kind in [TransactionKind::Income, TransactionKind::Expense] {
        for c in Category::all_for(kind).iter().copied() {
            assert_eq!(serde_json::to_value(c).unwrap(), json!(c.as_str()));
        }
    }
}

#[test]
fn category_snake_case_samples() {
    assert_eq!(serde_json::to_value(Category::CashCounted).unwrap(), json!("cash_counted"));
    assert_eq!(serde_json::to_value(Category::OtherIncome).unwrap(), json!("other_income"));
    assert_eq!(serde_json::to_value(Category::OtherExpense).unwrap(), json!("other_expense"));
}

#[test]
fn transaction_payload_shape() {
    let payload = TransactionPayload {
        kind: TransactionKind::Income,
        amount: 25_000.5,
        category: Category::Sales,
        description: Some("market stall".to_string()),
        date: Utc.with_ymd_and_hms(2026, 8, 20, 14, 45, 0).unwrap(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "kind": "income",
            "amount": 25_000.5,
            "category": "sales",
            "description": "market stall",
            "date": "2026-08-20T14:45:00Z",
        })
    );
}

#[test]
fn transaction_deserializes_from_backend_json() {
    let t: Transaction = serde_json::from_value(json!({
        "id": "tx-42",
        "kind": "expense",
        "amount": 12000.0,
        "category": "food",
        "description": null,
        "date": "2026-08-15T09:30:00Z",
    }))
    .unwrap();
    assert_eq!(t.id, "tx-42");
    assert_eq!(t.kind, TransactionKind::Expense);
    assert_eq!(t.category, Category::Food);
    assert_eq!(t.description, None);
    assert_eq!(t.date, Utc.with_ymd_and_hms(2026, 8, 15, 9, 30, 0).unwrap());
}
