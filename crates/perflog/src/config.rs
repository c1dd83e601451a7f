//! Recipes describing the layout of a benchmark log
//!
//! A [`Recipe`] is an ordered list of [`MetricSpec`] descriptors plus the
//! number of blocks to read. Each descriptor says how to turn one raw log
//! line into a number: how many trailing characters to drop, which
//! separator cleanup to apply, and which numeric type to parse.
//!
//! Two recipes are built in ([`Recipe::counters`] and [`Recipe::operations`]).
//! Others can be loaded from TOML:
//!
//! ```toml
//! name = "my-run"
//! blocks = 10
//!
//! [[metrics]]
//! name = "operations"
//! kind = "integer"
//! strip = 2
//!
//! [[metrics]]
//! name = "instructions"
//! strip = 2
//! separator = "comma_to_dot"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Result, SummaryError};

/// Number of blocks a benchmark log holds unless the recipe says otherwise.
pub const DEFAULT_BLOCKS: usize = 10;

/// Fewest samples that still leave something after dropping both extremes.
pub const MIN_BLOCKS: usize = 3;

/// Target numeric type of a metric line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    /// Whole number, parsed as `i64`
    Integer,
    /// Floating-point number, parsed as `f64`
    #[default]
    Float,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => f.write_str("an integer"),
            NumericKind::Float => f.write_str("a floating-point number"),
        }
    }
}

/// Cleanup applied to the digits before numeric conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorRule {
    /// Leave the text untouched
    #[default]
    Keep,
    /// Delete every `.` (thousands separators such as `1.234.567`)
    RemoveDots,
    /// Replace every `,` with `.` (decimal commas such as `12,34`)
    CommaToDot,
}

impl SeparatorRule {
    pub fn apply(self, text: &str) -> String {
        match self {
            SeparatorRule::Keep => text.to_string(),
            SeparatorRule::RemoveDots => text.replace('.', ""),
            SeparatorRule::CommaToDot => text.replace(',', "."),
        }
    }
}

/// Extraction descriptor for one metric line within a block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricSpec {
    /// Metric name, used in reports and error messages
    pub name: String,
    /// Numeric type the cleaned text must parse as (default: float)
    #[serde(default)]
    pub kind: NumericKind,
    /// Trailing characters to drop, line terminator included (default: 0)
    #[serde(default)]
    pub strip: usize,
    /// Separator cleanup (default: keep)
    #[serde(default)]
    pub separator: SeparatorRule,
}

impl MetricSpec {
    pub fn new(name: &str, kind: NumericKind, strip: usize, separator: SeparatorRule) -> Self {
        Self {
            name: name.to_string(),
            kind,
            strip,
            separator,
        }
    }
}

/// Layout of a benchmark log: which metrics each block holds, in order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Name of the recipe
    pub name: String,
    /// Number of blocks to read (default: 10)
    #[serde(default = "default_blocks")]
    pub blocks: usize,
    /// Metric lines of a block, in file order
    pub metrics: Vec<MetricSpec>,
}

fn default_blocks() -> usize {
    DEFAULT_BLOCKS
}

impl Recipe {
    /// Hardware counter runs: seven `perf stat` style lines per block.
    pub fn counters() -> Self {
        use NumericKind::{Float, Integer};
        use SeparatorRule::{CommaToDot, RemoveDots};

        Self {
            name: "counters".to_string(),
            blocks: DEFAULT_BLOCKS,
            metrics: vec![
                MetricSpec::new("context_switches", Integer, 2, RemoveDots),
                MetricSpec::new("page_faults", Integer, 2, RemoveDots),
                MetricSpec::new("instructions", Float, 2, CommaToDot),
                MetricSpec::new("branches", Float, 3, CommaToDot),
                MetricSpec::new("l1d_cache_misses", Float, 3, CommaToDot),
                MetricSpec::new("llc_misses", Float, 3, CommaToDot),
                MetricSpec::new("elapsed_seconds", Float, 3, CommaToDot),
            ],
        }
    }

    /// Throughput runs: operation count and instruction count per block.
    pub fn operations() -> Self {
        Self {
            name: "operations".to_string(),
            blocks: DEFAULT_BLOCKS,
            metrics: vec![
                MetricSpec::new("operations", NumericKind::Integer, 2, SeparatorRule::Keep),
                MetricSpec::new(
                    "instructions",
                    NumericKind::Float,
                    2,
                    SeparatorRule::CommaToDot,
                ),
            ],
        }
    }

    /// Look up a built-in recipe by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "counters" => Some(Self::counters()),
            "operations" => Some(Self::operations()),
            _ => None,
        }
    }

    /// Load a recipe from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - The recipe fails [`Recipe::validate`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid recipe file: {}", path.display()))
    }

    /// Parse a recipe from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use perflog::config::{NumericKind, Recipe};
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let toml = r#"
    ///     name = "ops"
    ///
    ///     [[metrics]]
    ///     name = "operations"
    ///     kind = "integer"
    ///     strip = 2
    /// "#;
    /// let recipe = Recipe::from_str(toml)?;
    /// assert_eq!(recipe.blocks, 10);
    /// assert_eq!(recipe.metrics[0].kind, NumericKind::Integer);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let recipe: Recipe = toml::from_str(s).context("Failed to parse TOML recipe")?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Check that the recipe can produce a trimmed mean for every metric.
    pub fn validate(&self) -> Result<()> {
        if self.metrics.is_empty() {
            return Err(SummaryError::InvalidRecipe(format!(
                "recipe `{}` declares no metrics",
                self.name
            )));
        }

        if self.blocks < MIN_BLOCKS {
            return Err(SummaryError::InvalidRecipe(format!(
                "recipe `{}` reads {} blocks, at least {} are needed",
                self.name, self.blocks, MIN_BLOCKS
            )));
        }

        let mut seen = HashSet::new();
        for metric in &self.metrics {
            if !seen.insert(metric.name.as_str()) {
                return Err(SummaryError::InvalidRecipe(format!(
                    "metric `{}` is declared twice",
                    metric.name
                )));
            }
        }

        Ok(())
    }
}
