//! Cash ledger tests: clamping, totals, payload (pure logic, no UI needed).

use chrono::{TimeZone, Utc};
use finanzas_frontend::ledger::CashLedger;
use finanzas_frontend::models::{DenominationKind, DENOMINATIONS};
use pretty_assertions::assert_eq;

#[test]
fn new_ledger_is_all_zero() {
    let ledger = CashLedger::new();
    for d in DENOMINATIONS.iter() {
        assert_eq!(ledger.quantity(d.value), 0);
    }
    assert_eq!(ledger.totals().grand_total, 0);
}

#[test]
fn decrement_at_zero_is_a_noop() {
    let mut ledger = CashLedger::new();
    ledger.decrement(50_000);
    ledger.decrement(50_000);
    assert_eq!(ledger.quantity(50_000), 0);

    ledger.increment(50_000);
    ledger.decrement(50_000);
    ledger.decrement(50_000);
    assert_eq!(ledger.quantity(50_000), 0);
}

#[test]
fn quantity_stays_non_negative_over_mixed_sequences() {
    let mut ledger = CashLedger::new();
    for _ in 0..3 {
        ledger.decrement(200);
    }
    ledger.increment(200);
    ledger.increment(200);
    for _ in 0..5 {
        ledger.decrement(200);
    }
    assert_eq!(ledger.quantity(200), 0);
    ledger.increment(200);
    assert_eq!(ledger.quantity(200), 1);
}

#[test]
fn bills_only_count_totals() {
    let mut ledger = CashLedger::new();
    ledger.set_quantity(100_000, "2");
    ledger.set_quantity(50_000, "1");
    ledger.set_quantity(2_000, "3");

    let totals = ledger.totals();
    assert_eq!(totals.bills_subtotal, 256_000);
    assert_eq!(totals.coins_subtotal, 0);
    assert_eq!(totals.grand_total, 256_000);
}

#[test]
fn grand_total_is_sum_of_subtotals() {
    let mut ledger = CashLedger::new();
    ledger.set_quantity(100_000, "7");
    ledger.set_quantity(2_000, "13");
    ledger.set_quantity(1_000, "4");
    ledger.set_quantity(500, "9");
    ledger.set_quantity(50, "21");

    let totals = ledger.totals();
    assert_eq!(totals.bills_subtotal, 726_000);
    assert_eq!(totals.coins_subtotal, 4_000 + 4_500 + 1_050);
    assert_eq!(totals.grand_total, totals.bills_subtotal + totals.coins_subtotal);
}

#[test]
fn non_numeric_input_counts_as_zero() {
    let mut ledger = CashLedger::new();
    ledger.set_quantity(10_000, "5");
    assert_eq!(ledger.quantity(10_000), 5);

    ledger.set_quantity(10_000, "abc");
    assert_eq!(ledger.quantity(10_000), 0);

    ledger.set_quantity(10_000, "5");
    ledger.set_quantity(10_000, "");
    assert_eq!(ledger.quantity(10_000), 0);
}

#[test]
fn negative_input_clamps_to_zero() {
    let mut ledger = CashLedger::new();
    ledger.set_quantity(5_000, "-4");
    assert_eq!(ledger.quantity(5_000), 0);
}

#[test]
fn set_quantity_touches_only_one_slot() {
    let mut ledger = CashLedger::new();
    ledger.set_quantity(100_000, "2");
    ledger.set_quantity(100, "8");

    ledger.set_quantity(20_000, "3");

    assert_eq!(ledger.quantity(100_000), 2);
    assert_eq!(ledger.quantity(100), 8);
    assert_eq!(ledger.quantity(20_000), 3);
}

#[test]
fn unknown_denomination_is_ignored() {
    let mut ledger = CashLedger::new();
    ledger.set_quantity(300, "5");
    ledger.increment(300);
    assert_eq!(ledger.totals().grand_total, 0);
}

#[test]
fn payload_carries_all_eleven_slots_and_totals() {
    let mut ledger = CashLedger::new();
    ledger.set_quantity(100_000, "1");
    ledger.set_quantity(500, "2");

    let date = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
    let payload = ledger.to_payload(Some("weekly count".to_string()), date);

    assert_eq!(payload.denominations.len(), DENOMINATIONS.len());
    // Parallel to the static table, largest first.
    assert_eq!(payload.denominations[0].value, 100_000);
    assert_eq!(payload.denominations[0].quantity, 1);
    let coin_500 = payload
        .denominations
        .iter()
        .find(|d| d.value == 500)
        .unwrap();
    assert_eq!(coin_500.quantity, 2);

    assert_eq!(payload.total_bills, 100_000);
    assert_eq!(payload.total_coins, 1_000);
    assert_eq!(payload.total_cash, 101_000);
    assert_eq!(payload.description.as_deref(), Some("weekly count"));
    assert_eq!(payload.date, date);
}

#[test]
fn denomination_table_partition() {
    let bills: Vec<i64> = DENOMINATIONS
        .iter()
        .filter(|d| d.kind == DenominationKind::Bill)
        .map(|d| d.value)
        .collect();
    let coins: Vec<i64> = DENOMINATIONS
        .iter()
        .filter(|d| d.kind == DenominationKind::Coin)
        .map(|d| d.value)
        .collect();
    assert_eq!(bills, vec![100_000, 50_000, 20_000, 10_000, 5_000, 2_000]);
    assert_eq!(coins, vec![1_000, 500, 200, 100, 50]);
}
