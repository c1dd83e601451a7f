//! Per-metric trimmed-mean summaries
//!
//! This module ties the pieces together: parse a log with a [`Recipe`],
//! trim every metric series, and collect the results in declared order.
//!
//! # Example
//!
//! ```no_run
//! use perflog::{config::Recipe, summary::summarize_file};
//!
//! # fn example() -> anyhow::Result<()> {
//! let summary = summarize_file("run.log", &Recipe::counters())?;
//! for metric in &summary.metrics {
//!     println!("{}: {}", metric.name, metric.mean);
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

use crate::config::{NumericKind, Recipe};
use crate::error::{Result, SummaryError};
use crate::parser::{parse_file, MetricSeries};
use crate::stats::{SpreadSummary, TrimmedMean};

/// Results for a whole log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Name of the recipe the log was read with
    pub recipe: String,
    /// File the samples came from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Number of blocks read
    pub blocks: usize,
    /// One entry per metric, in recipe order
    pub metrics: Vec<MetricResult>,
}

impl Summary {
    /// Trimmed means in recipe order.
    pub fn means(&self) -> Vec<f64> {
        self.metrics.iter().map(|m| m.mean).collect()
    }

    pub fn metric(&self, name: &str) -> Option<&MetricResult> {
        self.metrics.iter().find(|m| m.name == name)
    }
}

/// Trimmed statistics for a single metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Metric name
    pub name: String,
    /// Declared numeric type of the raw lines
    pub kind: NumericKind,
    /// Mean after dropping one minimum and one maximum
    pub mean: f64,
    /// Discarded minimum
    pub dropped_min: f64,
    /// Discarded maximum
    pub dropped_max: f64,
    /// Spread of the kept samples
    pub spread: SpreadSummary,
    /// Raw samples in read order
    pub samples: Vec<f64>,
}

impl MetricResult {
    /// Trim one series.
    ///
    /// # Errors
    ///
    /// [`SummaryError::InsufficientSamples`] when fewer than 3 samples exist.
    pub fn from_series(series: &MetricSeries) -> Result<Self> {
        let insufficient = || SummaryError::InsufficientSamples {
            metric: series.spec.name.clone(),
            count: series.samples.len(),
        };

        let trimmed = TrimmedMean::from_samples(&series.samples).ok_or_else(insufficient)?;
        let spread = SpreadSummary::from_samples(&trimmed.kept).ok_or_else(insufficient)?;

        Ok(MetricResult {
            name: series.spec.name.clone(),
            kind: series.spec.kind,
            mean: trimmed.mean,
            dropped_min: trimmed.dropped_min,
            dropped_max: trimmed.dropped_max,
            spread,
            samples: series.samples.clone(),
        })
    }
}

/// Summarize already-parsed series.
///
/// Fails on the first metric that cannot be trimmed, so a summary is
/// either complete or absent.
#[instrument(skip(recipe, series), fields(recipe = %recipe.name))]
pub fn summarize(recipe: &Recipe, series: &[MetricSeries]) -> Result<Summary> {
    let mut metrics = Vec::with_capacity(series.len());

    for entry in series {
        let result = MetricResult::from_series(entry)?;
        info!(
            "{}: trimmed mean {} (dropped min {}, max {})",
            result.name, result.mean, result.dropped_min, result.dropped_max
        );
        metrics.push(result);
    }

    Ok(Summary {
        recipe: recipe.name.clone(),
        source: None,
        blocks: recipe.blocks,
        metrics,
    })
}

/// Parse `path` with `recipe` and summarize every metric.
pub fn summarize_file<P: AsRef<Path>>(path: P, recipe: &Recipe) -> Result<Summary> {
    let path = path.as_ref();
    let series = parse_file(path, recipe)?;
    let mut summary = summarize(recipe, &series)?;
    summary.source = Some(path.display().to_string());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MetricSpec, SeparatorRule};

    fn series(name: &str, samples: Vec<f64>) -> MetricSeries {
        MetricSeries {
            spec: MetricSpec::new(name, NumericKind::Float, 0, SeparatorRule::Keep),
            samples,
        }
    }

    #[test]
    fn test_summarize_keeps_order() {
        let recipe = Recipe::operations();
        let input = vec![
            series("operations", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]),
            series("instructions", vec![2.5; 10]),
        ];

        let summary = summarize(&recipe, &input).unwrap();
        assert_eq!(summary.recipe, "operations");
        assert_eq!(summary.blocks, 10);
        assert_eq!(summary.means(), vec![5.5, 2.5]);
        assert_eq!(summary.metrics[0].dropped_max, 100.0);
        assert_eq!(summary.metrics[0].spread.count, 8);
        assert!(summary.source.is_none());
    }

    #[test]
    fn test_summarize_insufficient_samples() {
        let recipe = Recipe::operations();
        let input = vec![series("operations", vec![1.0, 2.0])];

        let err = summarize(&recipe, &input).unwrap_err();
        match err {
            SummaryError::InsufficientSamples { metric, count } => {
                assert_eq!(metric, "operations");
                assert_eq!(count, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_metric_lookup() {
        let recipe = Recipe::operations();
        let input = vec![series("instructions", vec![1.0, 2.0, 3.0])];
        let summary = summarize(&recipe, &input).unwrap();

        assert_eq!(summary.metric("instructions").map(|m| m.mean), Some(2.0));
        assert!(summary.metric("operations").is_none());
    }

    #[test]
    fn test_raw_samples_preserved() {
        let recipe = Recipe::operations();
        let raw = vec![9.0, 1.0, 5.0, 3.0];
        let summary = summarize(&recipe, &[series("operations", raw.clone())]).unwrap();
        assert_eq!(summary.metrics[0].samples, raw);
    }

    #[test]
    fn test_summary_json_roundtrip() {
        let recipe = Recipe::operations();
        let input = vec![series("operations", vec![1.0, 3.0, 3.0, 9.0])];
        let summary = summarize(&recipe, &input).unwrap();

        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("source"));
        let parsed: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
