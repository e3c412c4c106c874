//! Command dispatcher.
//!
//! The menu loop never touches the registry directly: it builds a
//! [`Request`], hands it to [`dispatch`], and renders the [`Response`]
//! or error. That keeps the whole command surface testable without a
//! terminal.

use fcibank_core::{AccountKind, CoreResult, Registry};
use fcibank_reports::BankReport;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Default interest rate for newly opened savings accounts (percent)
pub const DEFAULT_SAVINGS_RATE: Decimal = dec!(10);
/// Default overdraft limit for newly opened current accounts
pub const DEFAULT_OVERDRAFT_LIMIT: Decimal = dec!(1000);

/// Account variant as chosen from the menu. The variant parameters are
/// fixed session defaults, applied here at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountVariant {
    Savings,
    Current,
}

impl AccountVariant {
    /// The account kind this menu choice opens
    pub fn kind(self) -> AccountKind {
        match self {
            AccountVariant::Savings => AccountKind::Savings {
                interest_rate: DEFAULT_SAVINGS_RATE,
            },
            AccountVariant::Current => AccountKind::Current {
                overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
            },
        }
    }
}

/// Transaction direction chosen from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdraw,
}

/// One well-typed command for the core. Input parsing happens before a
/// Request exists; the core never sees raw text.
#[derive(Debug, Clone)]
pub enum Request {
    AddCustomer {
        name: String,
        national_id: String,
    },
    OpenAccount {
        customer_id: u32,
        variant: AccountVariant,
        initial_balance: Decimal,
    },
    Transact {
        customer_id: u32,
        account_index: usize,
        operation: Operation,
        amount: Decimal,
    },
    Report,
}

/// What a successful command produced
#[derive(Debug)]
pub enum Response {
    CustomerAdded(u32),
    AccountOpened(u32),
    BalanceChanged(Decimal),
    Report(BankReport),
}

/// Apply one request to the registry.
///
/// Every error is recoverable; the caller reports it and the session
/// continues with the registry unchanged.
pub fn dispatch(registry: &mut Registry, request: Request) -> CoreResult<Response> {
    debug!(?request, "dispatching");
    match request {
        Request::AddCustomer { name, national_id } => {
            let id = registry.add_customer(&name, &national_id);
            Ok(Response::CustomerAdded(id))
        }
        Request::OpenAccount {
            customer_id,
            variant,
            initial_balance,
        } => {
            let number = registry.open_account(customer_id, variant.kind(), initial_balance)?;
            Ok(Response::AccountOpened(number))
        }
        Request::Transact {
            customer_id,
            account_index,
            operation,
            amount,
        } => {
            let balance = match operation {
                Operation::Deposit => registry.deposit(customer_id, account_index, amount)?,
                Operation::Withdraw => registry.withdraw(customer_id, account_index, amount)?,
            };
            Ok(Response::BalanceChanged(balance))
        }
        Request::Report => Ok(Response::Report(BankReport::build(registry))),
    }
}
