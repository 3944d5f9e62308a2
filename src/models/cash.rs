use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenominationKind {
    Bill,
    Coin,
}

/// One face value of Colombian peso currency. Whole units, no subunits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Denomination {
    pub value: i64,
    pub kind: DenominationKind,
}

/// The eleven peso denominations, largest first. Read-only for the process lifetime.
pub static DENOMINATIONS: [Denomination; 11] = [
    Denomination { value: 100_000, kind: DenominationKind::Bill },
    Denomination { value: 50_000, kind: DenominationKind::Bill },
    Denomination { value: 20_000, kind: DenominationKind::Bill },
    Denomination { value: 10_000, kind: DenominationKind::Bill },
    Denomination { value: 5_000, kind: DenominationKind::Bill },
    Denomination { value: 2_000, kind: DenominationKind::Bill },
    Denomination { value: 1_000, kind: DenominationKind::Coin },
    Denomination { value: 500, kind: DenominationKind::Coin },
    Denomination { value: 200, kind: DenominationKind::Coin },
    Denomination { value: 100, kind: DenominationKind::Coin },
    Denomination { value: 50, kind: DenominationKind::Coin },
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DenominationCount {
    pub value: i64,
    pub quantity: u64,
}

/// Body of a cash-count create call: all eleven slots plus metadata and the
/// derived totals.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CashCountPayload {
    pub denominations: Vec<DenominationCount>,
    pub description: Option<String>,
    pub date: chrono::DateTime<chrono::Utc>,
    pub total_bills: i64,
    pub total_coins: i64,
    pub total_cash: i64,
}
