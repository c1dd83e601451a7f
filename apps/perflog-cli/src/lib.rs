//! Command-line front end for `perflog`
//!
//! Shared argument definitions and the run loop used by the
//! `summarize-counters`, `summarize-ops` and `summarize-log` binaries.

use anyhow::Context;
use clap::{Args, ValueEnum};
use perflog::{summarize_file, OutputFormat, Recipe, Reporter, Summary};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One trimmed mean per line
    #[default]
    Plain,
    /// Table with dropped extremes and spread
    Console,
    /// Compact JSON
    Json,
    /// Indented JSON
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Plain => OutputFormat::Plain,
            Format::Console => OutputFormat::Console,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

/// Input log plus output options, shared by every binary
#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// Benchmark log to summarize
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments of `summarize-log`, which takes its layout from a recipe
#[derive(Args, Debug, Clone)]
pub struct RecipeArgs {
    /// Built-in recipe name (`counters`, `operations`) or path to a TOML recipe
    #[arg(short, long)]
    pub recipe: String,

    #[command(flatten)]
    pub file: FileArgs,
}

/// Resolve `--recipe`: built-in names first, then a TOML file.
pub fn resolve_recipe(name_or_path: &str) -> anyhow::Result<Recipe> {
    if let Some(recipe) = Recipe::builtin(name_or_path) {
        debug!("Using built-in recipe '{}'", name_or_path);
        return Ok(recipe);
    }
    Recipe::from_file(name_or_path)
}

/// Summarize `args.input` with `recipe` and emit the report.
///
/// Nothing is written unless every metric was summarized.
pub fn run(args: &FileArgs, recipe: &Recipe) -> anyhow::Result<()> {
    info!(
        "Summarizing {} with recipe '{}'",
        args.input.display(),
        recipe.name
    );

    let summary = summarize_file(&args.input, recipe)
        .with_context(|| format!("Failed to summarize {}", args.input.display()))?;

    let reporter = Reporter::new(args.format.into());
    match args.output {
        Some(ref path) => write_report(&reporter, &summary, path)?,
        None => reporter.report(&summary)?,
    }

    Ok(())
}

fn write_report(reporter: &Reporter, summary: &Summary, path: &Path) -> anyhow::Result<()> {
    reporter
        .write_to_file(summary, path)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!("Report written to {}", path.display());
    Ok(())
}

/// Install the tracing subscriber.
///
/// Diagnostics go to stderr: stdout carries the report. Defaults to `warn`,
/// override with `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
