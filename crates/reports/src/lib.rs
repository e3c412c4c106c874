//! # FCI Bank Reports
//!
//! Read-only report projection over the registry plus exporters for
//! the formats the shell (or anything else) may want to render.
//!
//! ## Exporters
//!
//! - [`TextExporter`] - the console layout the interactive shell prints
//! - [`MarkdownExporter`] - Markdown tables for documentation
//! - [`JsonExporter`] - JSON format (pretty or compact)
//!
//! ## Example
//!
//! ```rust,ignore
//! use fcibank_reports::{BankReport, ReportExporter, TextExporter};
//!
//! let report = BankReport::build(&registry);
//! println!("{}", TextExporter::new().export(&report));
//! ```

pub mod exporters;
pub mod report;

pub use exporters::{JsonExporter, MarkdownExporter, ReportExporter, TextExporter};
pub use report::{AccountSummary, BankReport, CustomerSummary, TransactionLine};
