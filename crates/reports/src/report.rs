//! Report projection.
//!
//! `BankReport::build` walks the registry and copies everything a
//! report needs into plain serializable rows. It never mutates the
//! registry and produces identical output for identical registry state.

use chrono::{DateTime, Utc};
use fcibank_core::Registry;
use rust_decimal::Decimal;
use serde::Serialize;

/// One ledger entry as it appears in the report.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionLine {
    pub timestamp: DateTime<Utc>,
    pub kind: String,
    pub amount: Decimal,
}

/// One account with its ledger, in history order.
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub number: u32,
    /// Variant label ("savings" / "current")
    pub kind: String,
    pub balance: Decimal,
    /// Interest at the current balance (zero for current accounts)
    pub interest: Decimal,
    pub transactions: Vec<TransactionLine>,
}

/// One customer with their accounts, in open order.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub id: u32,
    pub name: String,
    pub accounts: Vec<AccountSummary>,
}

/// The full bank report: every customer in registration order.
#[derive(Debug, Clone, Serialize)]
pub struct BankReport {
    pub customers: Vec<CustomerSummary>,
}

impl BankReport {
    /// Project the registry into a report.
    pub fn build(registry: &Registry) -> Self {
        let customers = registry
            .customers()
            .map(|customer| CustomerSummary {
                id: customer.id,
                name: customer.name.clone(),
                accounts: customer
                    .accounts
                    .iter()
                    .map(|account| AccountSummary {
                        number: account.number,
                        kind: account.kind.as_str().to_string(),
                        balance: account.balance,
                        interest: account.interest(),
                        transactions: account
                            .history()
                            .iter()
                            .map(|txn| TransactionLine {
                                timestamp: txn.timestamp,
                                kind: txn.kind.as_str().to_string(),
                                amount: txn.amount,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { customers }
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcibank_core::AccountKind;
    use rust_decimal_macros::dec;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        let alice = registry.add_customer("Alice", "A-001");
        let bob = registry.add_customer("Bob", "B-002");
        registry
            .open_account(
                alice,
                AccountKind::Savings {
                    interest_rate: dec!(10),
                },
                dec!(100),
            )
            .unwrap();
        registry
            .open_account(
                bob,
                AccountKind::Current {
                    overdraft_limit: dec!(1000),
                },
                dec!(0),
            )
            .unwrap();
        registry.deposit(alice, 0, dec!(50)).unwrap();
        registry.withdraw(bob, 0, dec!(800)).unwrap();
        registry
    }

    #[test]
    fn test_report_structure_follows_registry_order() {
        let registry = sample_registry();
        let report = BankReport::build(&registry);

        assert_eq!(report.customers.len(), 2);
        assert_eq!(report.customers[0].name, "Alice");
        assert_eq!(report.customers[1].name, "Bob");

        let savings = &report.customers[0].accounts[0];
        assert_eq!(savings.number, 1000);
        assert_eq!(savings.kind, "savings");
        assert_eq!(savings.balance, dec!(150));
        assert_eq!(savings.interest, dec!(15.0));
        assert_eq!(savings.transactions.len(), 2);
        assert_eq!(savings.transactions[0].kind, "opening_balance");
        assert_eq!(savings.transactions[1].kind, "deposit");

        let current = &report.customers[1].accounts[0];
        assert_eq!(current.balance, dec!(-800));
        assert_eq!(current.interest, dec!(0));
        assert_eq!(current.transactions[1].kind, "withdraw");
        assert_eq!(current.transactions[1].amount, dec!(800));
    }

    #[test]
    fn test_build_does_not_mutate_registry() {
        let registry = sample_registry();
        let before: Vec<u32> = registry.customers().map(|c| c.id).collect();
        let _ = BankReport::build(&registry);
        let _ = BankReport::build(&registry);
        let after: Vec<u32> = registry.customers().map(|c| c.id).collect();
        assert_eq!(before, after);
        assert_eq!(
            registry.account(1, 0).unwrap().history().len(),
            2 // opening + deposit, unchanged by reporting
        );
    }

    #[test]
    fn test_empty_registry_yields_empty_report() {
        let report = BankReport::build(&Registry::new());
        assert!(report.is_empty());
    }
}
