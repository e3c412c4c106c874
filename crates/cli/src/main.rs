//! FCI Bank CLI - interactive banking session
//!
//! Runs a menu-driven session against an in-memory registry. Nothing is
//! persisted; when the session exits, the state is gone.
//!
//! ```bash
//! fcibank
//! fcibank --first-customer-id 100 --first-account-number 5000
//! RUST_LOG=debug fcibank --quiet
//! ```

use anyhow::Result;
use clap::Parser;
use fcibank_core::{registry, Registry};
use std::io;
use tracing_subscriber::EnvFilter;

mod repl;
mod shell;

use repl::Repl;

/// FCI Bank - an in-memory bank ledger with an interactive shell
#[derive(Parser)]
#[command(name = "fcibank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First customer id the session hands out
    #[arg(long, default_value_t = registry::FIRST_CUSTOMER_ID)]
    pub first_customer_id: u32,

    /// First account number the session hands out
    #[arg(long, default_value_t = registry::FIRST_ACCOUNT_NUMBER)]
    pub first_account_number: u32,

    /// Suppress the welcome banner
    #[arg(long, short)]
    pub quiet: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so the menu stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = Registry::with_seeds(cli.first_customer_id, cli.first_account_number);

    Repl::stdio(registry).run(cli.quiet)
}
