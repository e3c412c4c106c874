//! Report exporters - text, Markdown, JSON.
//!
//! Each exporter turns a [`BankReport`] into a string in its format.

use crate::report::BankReport;

/// Trait for exporting the bank report to different formats
pub trait ReportExporter {
    /// Export to the target format
    fn export(&self, report: &BankReport) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;

    /// Get the MIME type for this format
    fn mime_type(&self) -> &'static str;
}

// ============================================================================
// Text Exporter
// ============================================================================

/// Console layout printed by the interactive shell.
#[derive(Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for TextExporter {
    fn export(&self, report: &BankReport) -> String {
        let mut output = String::from("=== BANK REPORT ===\n");

        if report.is_empty() {
            output.push_str("(no customers)\n");
            return output;
        }

        for customer in &report.customers {
            output.push_str(&format!("ID: {} | Name: {}\n", customer.id, customer.name));
            for account in &customer.accounts {
                output.push_str(&format!(
                    "   - Acc#: {} ({}) | Bal: {} | Interest: {}\n",
                    account.number, account.kind, account.balance, account.interest
                ));
                for txn in &account.transactions {
                    output.push_str(&format!(
                        "     * {} - {}: {}\n",
                        txn.timestamp.format("%Y-%m-%d %H:%M:%S"),
                        txn.kind,
                        txn.amount
                    ));
                }
            }
            output.push_str("-------------------\n");
        }

        output
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }
}

// ============================================================================
// Markdown Exporter
// ============================================================================

/// Markdown exporter: one section per customer, one ledger table per
/// account.
#[derive(Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for MarkdownExporter {
    fn export(&self, report: &BankReport) -> String {
        let mut output = String::from("# Bank Report\n\n");

        for customer in &report.customers {
            output.push_str(&format!("## {} (id {})\n\n", customer.name, customer.id));
            for account in &customer.accounts {
                output.push_str(&format!(
                    "### Account {} - {} (balance {}, interest {})\n\n",
                    account.number, account.kind, account.balance, account.interest
                ));
                output.push_str("| Timestamp | Kind | Amount |\n");
                output.push_str("|---|---|---|\n");
                for txn in &account.transactions {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        txn.timestamp.format("%Y-%m-%d %H:%M:%S"),
                        txn.kind,
                        txn.amount
                    ));
                }
                output.push('\n');
            }
        }

        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn mime_type(&self) -> &'static str {
        "text/markdown"
    }
}

// ============================================================================
// JSON Exporter
// ============================================================================

/// JSON format exporter
pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &BankReport) -> String {
        if self.pretty {
            serde_json::to_string_pretty(report).unwrap_or_default()
        } else {
            serde_json::to_string(report).unwrap_or_default()
        }
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcibank_core::{AccountKind, Registry};
    use rust_decimal_macros::dec;

    fn sample_report() -> BankReport {
        let mut registry = Registry::new();
        let alice = registry.add_customer("Alice", "A-001");
        registry
            .open_account(
                alice,
                AccountKind::Savings {
                    interest_rate: dec!(10),
                },
                dec!(100),
            )
            .unwrap();
        registry.deposit(alice, 0, dec!(50)).unwrap();
        BankReport::build(&registry)
    }

    #[test]
    fn test_text_export_layout() {
        let output = TextExporter::new().export(&sample_report());

        assert!(output.starts_with("=== BANK REPORT ===\n"));
        assert!(output.contains("ID: 1 | Name: Alice"));
        assert!(output.contains("Acc#: 1000 (savings) | Bal: 150 | Interest: 15"));
        assert!(output.contains("opening_balance: 100"));
        assert!(output.contains("deposit: 50"));
        assert!(output.ends_with("-------------------\n"));
    }

    #[test]
    fn test_text_export_empty_report() {
        let report = BankReport::build(&Registry::new());
        let output = TextExporter::new().export(&report);
        assert!(output.contains("(no customers)"));
    }

    #[test]
    fn test_markdown_export_has_tables() {
        let output = MarkdownExporter::new().export(&sample_report());

        assert!(output.contains("## Alice (id 1)"));
        assert!(output.contains("### Account 1000 - savings"));
        assert!(output.contains("| Timestamp | Kind | Amount |"));
        assert!(output.contains("| deposit | 50 |"));
    }

    #[test]
    fn test_json_export_parses_back() {
        let output = JsonExporter::new().compact().export(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["customers"][0]["name"], "Alice");
        assert_eq!(value["customers"][0]["accounts"][0]["number"], 1000);
        // Decimal serializes as a string
        assert_eq!(value["customers"][0]["accounts"][0]["balance"], "150");
    }

    #[test]
    fn test_exporter_metadata() {
        assert_eq!(TextExporter::new().extension(), "txt");
        assert_eq!(MarkdownExporter::new().mime_type(), "text/markdown");
        assert_eq!(JsonExporter::new().extension(), "json");
    }
}
