//! Block parser for fixed-layout benchmark logs
//!
//! A log is a run of blocks. Each block holds one line per metric of the
//! [`Recipe`], in recipe order, followed by a single separator line:
//!
//! ```text
//! 1.204 \n        <- context_switches
//! 37 \n           <- page_faults
//! ...
//! 0,8123 s\n      <- elapsed_seconds
//! \n              <- separator
//! ```
//!
//! Exactly `recipe.blocks` blocks are read. Anything after the last block is
//! ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::config::{MetricSpec, Recipe};
use crate::error::{Result, SummaryError};
use crate::extract::extract_value;

/// Samples of one metric, in the order they were read
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    /// Descriptor the samples were extracted with
    pub spec: MetricSpec,
    /// One sample per block
    pub samples: Vec<f64>,
}

impl MetricSeries {
    pub fn new(spec: MetricSpec, capacity: usize) -> Self {
        Self {
            spec,
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }
}

/// Read `recipe.blocks` blocks from `reader`, one series per metric.
///
/// # Errors
///
/// - [`SummaryError::UnexpectedEof`] if the input ends before a metric line
/// - [`SummaryError::InvalidNumber`] if a line does not hold the declared number
/// - [`SummaryError::Read`] on I/O failure
///
/// # Example
///
/// ```
/// use perflog::config::Recipe;
/// use perflog::parser::parse_blocks;
///
/// let log = "42 \n1,5 \n\n".repeat(10);
/// let series = parse_blocks(log.as_bytes(), &Recipe::operations()).unwrap();
/// assert_eq!(series[0].samples, vec![42.0; 10]);
/// assert_eq!(series[1].samples, vec![1.5; 10]);
/// ```
#[instrument(skip(reader, recipe), fields(recipe = %recipe.name, blocks = recipe.blocks))]
pub fn parse_blocks<R: BufRead>(mut reader: R, recipe: &Recipe) -> Result<Vec<MetricSeries>> {
    recipe.validate()?;

    let mut series: Vec<MetricSeries> = recipe
        .metrics
        .iter()
        .map(|spec| MetricSeries::new(spec.clone(), recipe.blocks))
        .collect();

    let mut line = String::new();

    for block in 0..recipe.blocks {
        for entry in series.iter_mut() {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(SummaryError::UnexpectedEof {
                    block,
                    metric: entry.spec.name.clone(),
                });
            }

            let value = extract_value(&line, &entry.spec, block)?;
            debug!(block, metric = %entry.spec.name, value, "extracted sample");
            entry.samples.push(value);
        }

        // Separator line; a log may end right after its last metric line.
        line.clear();
        if reader.read_line(&mut line)? == 0 && block + 1 < recipe.blocks {
            warn!(block, "log ended where a separator line was expected");
        }

        debug!("Parsed block {} of {}", block + 1, recipe.blocks);
    }

    Ok(series)
}

/// Open `path` and parse it with [`parse_blocks`].
///
/// The file handle is dropped before this function returns, on success or
/// error. Read failures come back as [`SummaryError::ReadFile`] naming `path`.
pub fn parse_file<P: AsRef<Path>>(path: P, recipe: &Recipe) -> Result<Vec<MetricSeries>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SummaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Reading benchmark log {}", path.display());
    parse_blocks(BufReader::new(file), recipe).map_err(|err| match err {
        SummaryError::Read(source) => SummaryError::ReadFile {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
