//! # Transaction Module
//!
//! A Transaction is the immutable record of one balance-affecting event.
//! Each Account owns its transactions; the ordered history is the ledger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of balance-affecting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Initial funding recorded at account creation
    OpeningBalance,
    /// Funds added to the account
    Deposit,
    /// Funds taken out of the account
    Withdraw,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::OpeningBalance => "opening_balance",
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "opening_balance" => Some(TransactionKind::OpeningBalance),
            "deposit" => Some(TransactionKind::Deposit),
            "withdraw" => Some(TransactionKind::Withdraw),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in an account's ledger.
///
/// Immutable once created. `amount` is always non-negative; the sign
/// relevant for balance arithmetic comes from the kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// What happened
    pub kind: TransactionKind,
    /// Magnitude of the event (never negative)
    pub amount: Decimal,
    /// When it happened, captured at creation
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Record a new transaction, stamped now
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
        }
    }

    /// Amount signed by kind: deposits and opening balances count
    /// positive, withdrawals negative. Summing these over a ledger
    /// must reproduce the account balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::OpeningBalance | TransactionKind::Deposit => self.amount,
            TransactionKind::Withdraw => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount
        )
    }
}
