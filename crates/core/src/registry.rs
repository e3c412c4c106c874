//! # Registry Module
//!
//! The Registry owns every Customer for the session and hands out the
//! monotonic customer ids and account numbers. The original design kept
//! these counters in static fields; here they are explicit registry
//! state so tests can seed them deterministically.

use crate::account::{Account, AccountKind};
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// First customer id handed out by a fresh registry
pub const FIRST_CUSTOMER_ID: u32 = 1;
/// First account number handed out by a fresh registry
pub const FIRST_ACCOUNT_NUMBER: u32 = 1000;

/// Process-wide bank state: all customers plus the id counters.
///
/// Lives for exactly one session; nothing is persisted. Customer ids
/// and account numbers are never reused or reset, regardless of
/// account variant or owning customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    customers: Vec<Customer>,
    next_customer_id: u32,
    next_account_number: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::with_seeds(FIRST_CUSTOMER_ID, FIRST_ACCOUNT_NUMBER)
    }

    /// Registry whose counters start at the given values
    pub fn with_seeds(first_customer_id: u32, first_account_number: u32) -> Self {
        Self {
            customers: Vec::new(),
            next_customer_id: first_customer_id,
            next_account_number: first_account_number,
        }
    }

    /// Register a customer and return their assigned id.
    pub fn add_customer(&mut self, name: &str, national_id: &str) -> u32 {
        let id = self.next_customer_id;
        self.next_customer_id += 1;
        self.customers.push(Customer::new(id, name, national_id));
        info!(customer_id = id, name, "customer registered");
        id
    }

    /// Linear lookup by id. A miss returns `CustomerNotFound` and
    /// changes nothing.
    pub fn find_customer(&self, id: u32) -> CoreResult<&Customer> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .ok_or(CoreError::CustomerNotFound(id))
    }

    fn find_customer_mut(&mut self, id: u32) -> CoreResult<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::CustomerNotFound(id))
    }

    /// Customers in registration order. Restartable: each call reads
    /// from the beginning.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Open an account for a customer and return its account number.
    pub fn open_account(
        &mut self,
        customer_id: u32,
        kind: AccountKind,
        initial_balance: Decimal,
    ) -> CoreResult<u32> {
        let number = self.next_account_number;
        let customer = self.find_customer_mut(customer_id)?;
        let account = customer.open_account(number, kind, initial_balance);
        let balance = account.balance;
        self.next_account_number += 1;
        info!(customer_id, account = number, %balance, "account opened");
        Ok(number)
    }

    /// Deposit into one of a customer's accounts (by open order index).
    /// Returns the new balance.
    pub fn deposit(
        &mut self,
        customer_id: u32,
        account_index: usize,
        amount: Decimal,
    ) -> CoreResult<Decimal> {
        let account = self.account_mut(customer_id, account_index)?;
        let balance = account.deposit(amount)?;
        info!(customer_id, account_index, %amount, %balance, "deposit applied");
        Ok(balance)
    }

    /// Withdraw from one of a customer's accounts (by open order index),
    /// applying the account variant's rule. Returns the new balance.
    pub fn withdraw(
        &mut self,
        customer_id: u32,
        account_index: usize,
        amount: Decimal,
    ) -> CoreResult<Decimal> {
        let account = self.account_mut(customer_id, account_index)?;
        let balance = account.withdraw(amount)?;
        info!(customer_id, account_index, %amount, %balance, "withdrawal applied");
        Ok(balance)
    }

    /// Resolve an account for a transaction. A customer without any
    /// accounts (or an index past the end of their list) reports
    /// `NoAccounts`.
    pub fn account(
        &self,
        customer_id: u32,
        account_index: usize,
    ) -> CoreResult<&Account> {
        let customer = self.find_customer(customer_id)?;
        customer
            .accounts
            .get(account_index)
            .ok_or(CoreError::NoAccounts(customer_id))
    }

    fn account_mut(
        &mut self,
        customer_id: u32,
        account_index: usize,
    ) -> CoreResult<&mut Account> {
        let customer = self.find_customer_mut(customer_id)?;
        let id = customer.id;
        customer
            .accounts
            .get_mut(account_index)
            .ok_or(CoreError::NoAccounts(id))
    }
}
