//! # Account Module
//!
//! Account variants and their rules. The original design used an
//! inheritance hierarchy; here the variants are a closed enum carrying
//! the per-variant parameter, and withdraw/interest dispatch over it.

use crate::error::{CoreError, CoreResult};
use crate::transaction::{Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account variant with its variant-specific parameter.
///
/// - Savings: earns interest, may never go below zero.
/// - Current: earns nothing, may go negative down to the overdraft limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum AccountKind {
    /// Interest-bearing account; rate is a percentage (10 = 10%)
    Savings { interest_rate: Decimal },
    /// Checking account with an overdraft allowance
    Current { overdraft_limit: Decimal },
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "savings",
            AccountKind::Current { .. } => "current",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer's bank account.
///
/// Invariants:
/// - `history` is never empty; its first entry is always OpeningBalance.
/// - `balance` equals the signed sum of all transactions in `history`.
/// - A Current account's balance never drops below `-overdraft_limit`;
///   any other account's balance never drops below zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Process-wide unique account number, assigned by the registry
    pub number: u32,
    /// Variant and its parameter
    pub kind: AccountKind,
    /// Current balance
    pub balance: Decimal,
    /// Append-only ledger, insertion order = chronological order
    history: Vec<Transaction>,
}

impl Account {
    /// Open an account with the given number and initial funding.
    ///
    /// A negative initial balance is clamped to zero; the clamped
    /// amount is what the OpeningBalance entry records.
    pub fn open(number: u32, kind: AccountKind, initial_balance: Decimal) -> Self {
        let balance = initial_balance.max(Decimal::ZERO);
        Self {
            number,
            kind,
            balance,
            history: vec![Transaction::new(TransactionKind::OpeningBalance, balance)],
        }
    }

    /// Read-only view of the ledger
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Add funds.
    ///
    /// Rejects non-positive amounts with `InvalidAmount`; there is no
    /// upper bound. On success the new balance is returned and a
    /// Deposit entry is appended.
    pub fn deposit(&mut self, amount: Decimal) -> CoreResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount));
        }
        self.balance += amount;
        self.history
            .push(Transaction::new(TransactionKind::Deposit, amount));
        Ok(self.balance)
    }

    /// Take funds out, applying the variant's rule.
    ///
    /// Non-positive amounts are rejected as `InvalidAmount` (a negative
    /// withdrawal would otherwise act as a deposit). A Savings account
    /// requires `balance >= amount`; a Current account requires
    /// `balance + overdraft_limit >= amount`. On failure the balance
    /// and history are untouched.
    pub fn withdraw(&mut self, amount: Decimal) -> CoreResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount));
        }
        let available = self.available();
        if available < amount {
            return Err(match self.kind {
                AccountKind::Savings { .. } => CoreError::InsufficientFunds {
                    requested: amount,
                    available,
                },
                AccountKind::Current { .. } => CoreError::OverdraftExceeded {
                    requested: amount,
                    available,
                },
            });
        }
        self.balance -= amount;
        self.history
            .push(Transaction::new(TransactionKind::Withdraw, amount));
        Ok(self.balance)
    }

    /// Funds withdrawable right now: the balance, plus the overdraft
    /// allowance for a Current account.
    pub fn available(&self) -> Decimal {
        match self.kind {
            AccountKind::Savings { .. } => self.balance,
            AccountKind::Current { overdraft_limit } => self.balance + overdraft_limit,
        }
    }

    /// Interest earned at the current balance.
    ///
    /// Pure: nothing is credited and no transaction is recorded.
    /// Savings yields `balance * rate / 100`; Current yields zero.
    pub fn interest(&self) -> Decimal {
        match self.kind {
            AccountKind::Savings { interest_rate } => {
                self.balance * interest_rate / Decimal::ONE_HUNDRED
            }
            AccountKind::Current { .. } => Decimal::ZERO,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account #{} ({}, balance: {})",
            self.number, self.kind, self.balance
        )
    }
}
