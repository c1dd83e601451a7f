use std::path::PathBuf;

use thiserror::Error;

use crate::config::NumericKind;

/// Failures while turning a benchmark log into per-metric summaries.
///
/// Every variant is fatal: a run either summarizes every metric or reports
/// the first error it hit.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("block {block}: expected a line for metric `{metric}` but the log ended")]
    UnexpectedEof { block: usize, metric: String },

    #[error("block {block}: metric `{metric}` expected {kind} but found {text:?}")]
    InvalidNumber {
        block: usize,
        metric: String,
        kind: NumericKind,
        text: String,
    },

    #[error("metric `{metric}` has {count} samples, at least 3 are needed to trim both extremes")]
    InsufficientSamples { metric: String, count: usize },

    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),
}

pub type Result<T> = std::result::Result<T, SummaryError>;
