//! Interactive menu loop.
//!
//! All terminal concerns live here: prompts, parsing, re-prompting on
//! bad input. Unparsable input never reaches the core - by the time a
//! [`Request`](crate::shell::Request) exists, its fields are well typed.

use crate::shell::{dispatch, AccountVariant, Operation, Request, Response};
use anyhow::Result;
use fcibank_core::Registry;
use fcibank_reports::{BankReport, ReportExporter, TextExporter};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Top-level menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCustomer,
    OpenAccount,
    Transact,
    Report,
    Exit,
}

/// Parse a menu line ("1".."5", surrounding whitespace tolerated)
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::AddCustomer),
        "2" => Some(MenuChoice::OpenAccount),
        "3" => Some(MenuChoice::Transact),
        "4" => Some(MenuChoice::Report),
        "5" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Parse an account-variant line
pub fn parse_variant(input: &str) -> Option<AccountVariant> {
    match input.trim() {
        "1" => Some(AccountVariant::Savings),
        "2" => Some(AccountVariant::Current),
        _ => None,
    }
}

/// Parse a deposit/withdraw line
pub fn parse_operation(input: &str) -> Option<Operation> {
    match input.trim() {
        "1" => Some(Operation::Deposit),
        "2" => Some(Operation::Withdraw),
        _ => None,
    }
}

/// Parse an account pick against how many accounts the customer has.
/// Accounts are listed 1-based; the result is the 0-based index.
pub fn parse_account_pick(input: &str, count: usize) -> Option<usize> {
    let pick: usize = input.trim().parse().ok()?;
    if (1..=count).contains(&pick) {
        Some(pick - 1)
    } else {
        None
    }
}

/// The interactive session: owns the registry and the I/O handles.
pub struct Repl<R, W> {
    registry: Registry,
    input: R,
    output: W,
}

impl Repl<io::BufReader<io::Stdin>, io::Stdout> {
    pub fn stdio(registry: Registry) -> Self {
        Repl::new(registry, io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Run until the exit command or end of input. No state survives.
    pub fn run(&mut self, quiet: bool) -> Result<()> {
        if !quiet {
            writeln!(self.output, "=== Welcome to FCI Bank System ===")?;
        }

        loop {
            writeln!(self.output, "\n--- Main Menu ---")?;
            writeln!(self.output, "1. Add New Customer")?;
            writeln!(self.output, "2. Open New Account")?;
            writeln!(self.output, "3. Deposit / Withdraw")?;
            writeln!(self.output, "4. Show Full Report")?;
            writeln!(self.output, "5. Exit")?;

            let Some(line) = self.prompt("Choose (1-5): ")? else {
                break; // end of input
            };
            match parse_menu_choice(&line) {
                Some(MenuChoice::AddCustomer) => self.add_customer()?,
                Some(MenuChoice::OpenAccount) => self.open_account()?,
                Some(MenuChoice::Transact) => self.transact()?,
                Some(MenuChoice::Report) => self.report()?,
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "Invalid choice!")?,
            }
        }

        Ok(())
    }

    fn add_customer(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(());
        };
        let Some(national_id) = self.prompt("Enter National ID: ")? else {
            return Ok(());
        };

        match dispatch(
            &mut self.registry,
            Request::AddCustomer { name, national_id },
        ) {
            Ok(Response::CustomerAdded(id)) => {
                writeln!(self.output, "Customer Added! Your ID is: {id}")?
            }
            Ok(other) => unexpected_response(other),
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn open_account(&mut self) -> Result<()> {
        let Some(customer_id) = self.prompt_parse::<u32>("Enter Customer ID: ")? else {
            return Ok(());
        };
        // Fail the lookup before asking for the rest
        if let Err(err) = self.registry.find_customer(customer_id) {
            writeln!(self.output, "Error: {err}")?;
            return Ok(());
        }

        writeln!(self.output, "Account Type: 1. Savings   2. Current")?;
        let variant = loop {
            let Some(line) = self.prompt("Choose (1-2): ")? else {
                return Ok(());
            };
            match parse_variant(&line) {
                Some(variant) => break variant,
                None => writeln!(self.output, "Invalid choice!")?,
            }
        };

        let Some(initial_balance) = self.prompt_parse::<Decimal>("Initial Balance: ")? else {
            return Ok(());
        };

        match dispatch(
            &mut self.registry,
            Request::OpenAccount {
                customer_id,
                variant,
                initial_balance,
            },
        ) {
            Ok(Response::AccountOpened(number)) => {
                writeln!(self.output, "{variant:?} Account Created. Number: {number}")?
            }
            Ok(other) => unexpected_response(other),
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn transact(&mut self) -> Result<()> {
        let Some(customer_id) = self.prompt_parse::<u32>("Enter Customer ID: ")? else {
            return Ok(());
        };
        let account_count = match self.registry.find_customer(customer_id) {
            Ok(customer) => customer.accounts.len(),
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                return Ok(());
            }
        };
        if account_count == 0 {
            writeln!(self.output, "No accounts found.")?;
            return Ok(());
        }

        let account_index = if account_count == 1 {
            0
        } else {
            self.list_accounts(customer_id)?;
            loop {
                let Some(line) = self.prompt(&format!("Pick account (1-{account_count}): "))?
                else {
                    return Ok(());
                };
                match parse_account_pick(&line, account_count) {
                    Some(index) => break index,
                    None => writeln!(self.output, "Invalid choice!")?,
                }
            }
        };

        // Current balance before the operation, as the original shell did
        if let Ok(account) = self.registry.account(customer_id, account_index) {
            writeln!(self.output, "Current Balance: {}", account.balance)?;
        }

        writeln!(self.output, "1. Deposit   2. Withdraw")?;
        let operation = loop {
            let Some(line) = self.prompt("Choose (1-2): ")? else {
                return Ok(());
            };
            match parse_operation(&line) {
                Some(operation) => break operation,
                None => writeln!(self.output, "Invalid choice!")?,
            }
        };

        let Some(amount) = self.prompt_parse::<Decimal>("Amount: ")? else {
            return Ok(());
        };

        match dispatch(
            &mut self.registry,
            Request::Transact {
                customer_id,
                account_index,
                operation,
                amount,
            },
        ) {
            Ok(Response::BalanceChanged(balance)) => {
                writeln!(self.output, "Successful. New Balance: {balance}")?
            }
            Ok(other) => unexpected_response(other),
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn report(&mut self) -> Result<()> {
        let report = BankReport::build(&self.registry);
        write!(self.output, "\n{}", TextExporter::new().export(&report))?;
        Ok(())
    }

    fn list_accounts(&mut self, customer_id: u32) -> Result<()> {
        let lines: Vec<String> = match self.registry.find_customer(customer_id) {
            Ok(customer) => customer
                .accounts
                .iter()
                .enumerate()
                .map(|(i, account)| {
                    format!(
                        "{}. Acc#: {} ({}) | Bal: {}",
                        i + 1,
                        account.number,
                        account.kind,
                        account.balance
                    )
                })
                .collect(),
            Err(_) => return Ok(()),
        };
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` means the input
    /// stream ended.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the line parses as `T`, re-prompting on junk
    fn prompt_parse<T: FromStr>(&mut self, message: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid input, try again.")?,
            }
        }
    }
}

fn unexpected_response(response: Response) {
    // dispatch() pairs each request with one response variant
    tracing::warn!(?response, "response does not match request");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("1"), Some(MenuChoice::AddCustomer));
        assert_eq!(parse_menu_choice(" 4 "), Some(MenuChoice::Report));
        assert_eq!(parse_menu_choice("5"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("9"), None);
        assert_eq!(parse_menu_choice("deposit"), None);
    }

    #[test]
    fn test_parse_variant_and_operation() {
        assert_eq!(parse_variant("1"), Some(AccountVariant::Savings));
        assert_eq!(parse_variant("2"), Some(AccountVariant::Current));
        assert_eq!(parse_variant("3"), None);

        assert_eq!(parse_operation("1"), Some(Operation::Deposit));
        assert_eq!(parse_operation("2"), Some(Operation::Withdraw));
        assert_eq!(parse_operation(""), None);
    }

    #[test]
    fn test_parse_account_pick() {
        assert_eq!(parse_account_pick("1", 3), Some(0));
        assert_eq!(parse_account_pick("3", 3), Some(2));
        assert_eq!(parse_account_pick("4", 3), None);
        assert_eq!(parse_account_pick("0", 3), None);
        assert_eq!(parse_account_pick("x", 3), None);
    }

    /// Drive a whole session through buffered I/O.
    fn run_session(script: &str) -> (Registry, String) {
        let mut output = Vec::new();
        let mut repl = Repl::new(Registry::new(), script.as_bytes(), &mut output);
        repl.run(true).unwrap();
        let Repl { registry, .. } = repl;
        let rendered = String::from_utf8(output).unwrap();
        (registry, rendered)
    }

    #[test]
    fn test_full_session() {
        // Add Alice, open a savings account with 100, deposit 50,
        // print the report, exit.
        let script = "1\nAlice\nA-001\n2\n1\n1\n100\n3\n1\n1\n50\n4\n5\n";
        let (registry, rendered) = run_session(script);

        assert_eq!(registry.customer_count(), 1);
        let account = registry.account(1, 0).unwrap();
        assert_eq!(account.balance, dec!(150));
        assert_eq!(account.history().len(), 2);

        assert!(rendered.contains("Customer Added! Your ID is: 1"));
        assert!(rendered.contains("Savings Account Created. Number: 1000"));
        assert!(rendered.contains("Current Balance: 100"));
        assert!(rendered.contains("Successful. New Balance: 150"));
        assert!(rendered.contains("=== BANK REPORT ==="));
    }

    #[test]
    fn test_invalid_menu_input_reprompts() {
        let script = "7\nbogus\n5\n";
        let (registry, rendered) = run_session(script);

        assert_eq!(registry.customer_count(), 0);
        assert_eq!(rendered.matches("Invalid choice!").count(), 2);
    }

    #[test]
    fn test_unparsable_amount_never_reaches_core() {
        // Deposit flow with junk amounts before a valid one
        let script = "1\nBob\nB-002\n2\n1\n2\n0\n3\n1\n1\nabc\n12,5\n40\n5\n";
        let (registry, rendered) = run_session(script);

        let account = registry.account(1, 0).unwrap();
        assert_eq!(account.balance, dec!(40));
        // opening + one deposit only; the junk lines left no trace
        assert_eq!(account.history().len(), 2);
        assert_eq!(rendered.matches("Invalid input, try again.").count(), 2);
    }

    #[test]
    fn test_transaction_without_accounts() {
        let script = "1\nCarol\nC-003\n3\n1\n5\n";
        let (_, rendered) = run_session(script);
        assert!(rendered.contains("No accounts found."));
    }

    #[test]
    fn test_failed_withdrawal_is_reported_and_state_kept() {
        // Current account, withdraw 800 ok, then 300 rejected
        let script = "1\nDan\nD-004\n2\n1\n2\n0\n3\n1\n2\n800\n3\n1\n2\n300\n5\n";
        let (registry, rendered) = run_session(script);

        assert_eq!(registry.account(1, 0).unwrap().balance, dec!(-800));
        assert!(rendered.contains("Successful. New Balance: -800"));
        assert!(rendered.contains("Overdraft limit exceeded"));
    }

    #[test]
    fn test_multiple_accounts_pick_by_index() {
        // Two accounts; deposit into the second (the current account)
        let script = "1\nEve\nE-005\n2\n1\n1\n100\n2\n1\n2\n0\n3\n1\n2\n1\n75\n5\n";
        let (registry, rendered) = run_session(script);

        assert!(rendered.contains("1. Acc#: 1000 (savings)"));
        assert!(rendered.contains("2. Acc#: 1001 (current)"));
        assert_eq!(registry.account(1, 0).unwrap().balance, dec!(100));
        assert_eq!(registry.account(1, 1).unwrap().balance, dec!(75));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (registry, _) = run_session("1\nFay\nF-006\n");
        assert_eq!(registry.customer_count(), 1);
    }
}
