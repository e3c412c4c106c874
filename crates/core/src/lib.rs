//! # FCI Bank Core
//!
//! In-memory banking domain: transactions, polymorphic accounts,
//! customers, and the registry that owns them all. No persistence,
//! no I/O - state lives for one session.

pub mod account;
pub mod customer;
pub mod error;
pub mod registry;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use customer::Customer;
pub use error::{CoreError, CoreResult};
pub use registry::Registry;
pub use transaction::{Transaction, TransactionKind};
