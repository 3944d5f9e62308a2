//! Cash denomination ledger: one quantity per peso denomination.
//! No side effects, easy to test.

use chrono::{DateTime, Utc};

use crate::models::{CashCountPayload, DenominationCount, DenominationKind, DENOMINATIONS};

/// Quantities for all eleven denominations, parallel to `DENOMINATIONS`.
/// Quantities are never negative; every mutation clamps at zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CashLedger {
    quantities: [u64; DENOMINATIONS.len()],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CashTotals {
    pub bills_subtotal: i64,
    pub coins_subtotal: i64,
    pub grand_total: i64,
}

impl Default for CashLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl CashLedger {
    pub fn new() -> Self {
        CashLedger {
            quantities: [0; DENOMINATIONS.len()],
        }
    }

    fn slot(value: i64) -> Option<usize> {
        DENOMINATIONS.iter().position(|d| d.value == value)
    }

    pub fn quantity(&self, value: i64) -> u64 {
        Self::slot(value).map(|i| self.quantities[i]).unwrap_or(0)
    }

    /// Replace one denomination's quantity from raw text input. Parse failure
    /// (empty, non-numeric) counts as zero; negative input clamps to zero.
    /// The other ten slots are untouched.
    pub fn set_quantity(&mut self, value: i64, raw: &str) {
        if let Some(i) = Self::slot(value) {
            self.quantities[i] = raw.trim().parse::<i64>().unwrap_or(0).max(0) as u64;
        }
    }

    pub fn increment(&mut self, value: i64) {
        if let Some(i) = Self::slot(value) {
            self.quantities[i] = self.quantities[i].saturating_add(1);
        }
    }

    /// Decrement at zero is a no-op.
    pub fn decrement(&mut self, value: i64) {
        if let Some(i) = Self::slot(value) {
            self.quantities[i] = self.quantities[i].saturating_sub(1);
        }
    }

    /// Fold quantity x face value over all slots, partitioned by bill/coin.
    /// Whole currency units, no rounding.
    pub fn totals(&self) -> CashTotals {
        let mut totals = CashTotals::default();
        for (d, &q) in DENOMINATIONS.iter().zip(&self.quantities) {
            let line = d.value * q as i64;
            match d.kind {
                DenominationKind::Bill => totals.bills_subtotal += line,
                DenominationKind::Coin => totals.coins_subtotal += line,
            }
        }
        totals.grand_total = totals.bills_subtotal + totals.coins_subtotal;
        totals
    }

    /// Full eleven-slot record for the cash-count create endpoint.
    pub fn to_payload(&self, description: Option<String>, date: DateTime<Utc>) -> CashCountPayload {
        let totals = self.totals();
        CashCountPayload {
            denominations: DENOMINATIONS
                .iter()
                .zip(&self.quantities)
                .map(|(d, &q)| DenominationCount {
                    value: d.value,
                    quantity: q,
                })
                .collect(),
            description,
            date,
            total_bills: totals.bills_subtotal,
            total_coins: totals.coins_subtotal,
            total_cash: totals.grand_total,
        }
    }
}
