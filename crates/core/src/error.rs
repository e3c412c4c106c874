//! # Error Module
//!
//! Domain errors for FCI Bank, defined with thiserror.
//! Every error here is recoverable: the shell reports it and prompts again.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// No operation partially mutates state: when one of these is returned,
/// balances and transaction histories are exactly as they were before.
#[derive(Debug, Error)]
pub enum CoreError {
    // === Amount errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    // === Withdrawal errors ===
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Overdraft limit exceeded: requested {requested}, available {available}")]
    OverdraftExceeded {
        requested: Decimal,
        available: Decimal,
    },

    // === Lookup errors ===
    #[error("Customer not found: {0}")]
    CustomerNotFound(u32),

    #[error("Customer {0} has no accounts")]
    NoAccounts(u32),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Whether this is a rejected withdrawal (either account rule)
    pub fn is_withdrawal_rejection(&self) -> bool {
        matches!(
            self,
            CoreError::InsufficientFunds { .. } | CoreError::OverdraftExceeded { .. }
        )
    }

    /// Whether this is a lookup miss rather than a rule violation
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::CustomerNotFound(_) | CoreError::NoAccounts(_)
        )
    }
}
