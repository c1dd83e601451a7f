//! Summary reporting
//!
//! This module renders a [`Summary`] in one of several formats.
//!
//! # Output Formats
//!
//! - **Plain**: one trimmed mean per line, in recipe order (the default)
//! - **Console**: Human-readable table with the dropped extremes and spread
//! - **JSON**: Machine-readable format for scripting
//!
//! # Example
//!
//! ```no_run
//! use perflog::reporter::{Reporter, OutputFormat};
//! use perflog::summary::Summary;
//!
//! # fn example(summary: Summary) -> anyhow::Result<()> {
//! Reporter::new(OutputFormat::Plain).report(&summary)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Json)
//!     .write_to_file(&summary, "summary.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;
mod plain;

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::summary::Summary;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use plain::{format_mean, PlainReporter};

/// Output format for summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One mean per line
    #[default]
    Plain,
    /// Table for reading in a terminal
    Console,
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Reporter for summaries
#[derive(Debug, Default)]
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report a summary to stdout
    pub fn report(&self, summary: &Summary) -> Result<()> {
        let output = self.format_summary(summary)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Write a summary to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, summary: &Summary, path: P) -> Result<()> {
        let output = self.format_summary(summary)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format a summary as a string
    pub fn format_summary(&self, summary: &Summary) -> Result<String> {
        match self.format {
            OutputFormat::Plain => PlainReporter::format(summary),
            OutputFormat::Console => ConsoleReporter::format(summary),
            OutputFormat::Json => JsonReporter::format(summary, false),
            OutputFormat::JsonPretty => JsonReporter::format(summary, true),
        }
    }
}
