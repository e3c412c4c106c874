//! # Customer Module
//!
//! A Customer owns an ordered collection of Accounts. Customers are
//! created through the registry and never deleted during a session.

use crate::account::{Account, AccountKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank customer and the accounts they hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Process-wide unique id, assigned by the registry
    pub id: u32,
    /// Full name
    pub name: String,
    /// Government-issued id string
    pub national_id: String,
    /// Accounts in the order they were opened
    pub accounts: Vec<Account>,
    /// When the customer was registered
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(id: u32, name: &str, national_id: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            national_id: national_id.to_string(),
            accounts: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Open an account under this customer. The account number comes
    /// from the registry's counter; there is no limit on how many
    /// accounts a customer may hold.
    pub fn open_account(
        &mut self,
        number: u32,
        kind: AccountKind,
        initial_balance: Decimal,
    ) -> &Account {
        self.accounts.push(Account::open(number, kind, initial_balance));
        self.accounts.last().expect("accounts is non-empty after push")
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id: {}, accounts: {})",
            self.name,
            self.id,
            self.accounts.len()
        )
    }
}
