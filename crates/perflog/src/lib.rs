//! Trimmed-mean summaries of repeated benchmark logs
//!
//! A benchmark is run ten times and each run appends a fixed block of lines
//! to a log: one line per measured quantity, then a separator line. This
//! crate reads such a log, collects every metric into its own series, drops
//! the single lowest and single highest sample of each, and reports the mean
//! of what remains.
//!
//! # Features
//!
//! - **Declarative recipes**: each metric line is described by a [`MetricSpec`]
//!   (trailing characters to strip, separator cleanup, numeric type)
//! - **Built-in layouts**: [`Recipe::counters`] for seven hardware counters,
//!   [`Recipe::operations`] for operation and instruction counts
//! - **TOML recipes**: describe any other block layout in a file
//! - **Multiple Output Formats**: plain means, console table, JSON
//!
//! # Example
//!
//! ```no_run
//! use perflog::{Recipe, Reporter, OutputFormat, summarize_file};
//!
//! # fn example() -> anyhow::Result<()> {
//! let summary = summarize_file("barnes.log", &Recipe::counters())?;
//!
//! // Prints one trimmed mean per line
//! Reporter::new(OutputFormat::Plain).report(&summary)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod parser;
pub mod reporter;
pub mod stats;
pub mod summary;

// Re-export main types for convenience
pub use config::{MetricSpec, NumericKind, Recipe, SeparatorRule};
pub use error::SummaryError;
pub use parser::{parse_blocks, parse_file, MetricSeries};
pub use reporter::{OutputFormat, Reporter};
pub use summary::{summarize, summarize_file, MetricResult, Summary};
