//! Console reporter for summaries
//!
//! Provides human-readable output with an ASCII table per log.

use anyhow::Result;
use std::fmt::Write;

use crate::summary::{MetricResult, Summary};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a summary for console output
    pub fn format(summary: &Summary) -> Result<String> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(output, "Recipe:  {}", summary.recipe)?;
        if let Some(ref source) = summary.source {
            writeln!(output, "Source:  {}", source)?;
        }
        writeln!(
            output,
            "Blocks:  {} (trimmed mean drops 1 min and 1 max per metric)",
            summary.blocks
        )?;
        writeln!(output)?;

        let width = summary
            .metrics
            .iter()
            .map(|m| m.name.len())
            .max()
            .unwrap_or(0)
            .max("Metric".len());

        writeln!(
            output,
            "  {:<width$} │ {:>16} │ {:>14} │ {:>14} │ {:>12} │ {:>7}",
            "Metric",
            "Trimmed mean",
            "Dropped min",
            "Dropped max",
            "Std dev",
            "CV",
            width = width
        )?;
        writeln!(output, "  {}", "─".repeat(width + 79))?;

        for metric in &summary.metrics {
            Self::format_metric_row(&mut output, metric, width)?;
        }

        writeln!(output)?;
        Ok(output)
    }

    fn format_metric_row(output: &mut String, metric: &MetricResult, width: usize) -> Result<()> {
        let cv = metric.spread.coefficient_of_variation();
        let cv = if cv.is_finite() {
            format!("{:.2}%", cv * 100.0)
        } else {
            "-".to_string()
        };

        writeln!(
            output,
            "  {:<width$} │ {:>16} │ {:>14} │ {:>14} │ {:>12} │ {:>7}",
            metric.name,
            format_value(metric.mean),
            format_value(metric.dropped_min),
            format_value(metric.dropped_max),
            format_value(metric.spread.std_dev),
            cv,
            width = width
        )?;

        Ok(())
    }
}

fn format_value(v: f64) -> String {
    if v != 0.0 && v.abs() < 1.0 {
        format!("{:.4}", v)
    } else {
        format!("{:.2}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_console_header() {
        let output = ConsoleReporter::format(&fixtures::summary()).unwrap();
        let header: Vec<&str> = output.lines().take(4).collect();

        assert_eq!(
            header,
            vec![
                "",
                "Recipe:  operations",
                "Source:  linked.log",
                "Blocks:  10 (trimmed mean drops 1 min and 1 max per metric)",
            ]
        );
    }

    #[test]
    fn test_console_rows() {
        let output = ConsoleReporter::format(&fixtures::summary()).unwrap();

        let row = output
            .lines()
            .find(|l| l.trim_start().starts_with("operations"))
            .unwrap();
        assert!(row.contains("1234.00"));
        assert!(row.contains("1100.00"));
        assert!(row.contains("1400.00"));
        assert!(row.contains("2.00%"));

        assert!(output.contains("instructions"));
        assert!(output.contains("36.36%"));
    }

    #[test]
    fn test_console_without_source() {
        let mut summary = fixtures::summary();
        summary.source = None;
        let output = ConsoleReporter::format(&summary).unwrap();
        assert!(!output.contains("Source:"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0.00");
        assert_eq!(format_value(0.51234), "0.5123");
        assert_eq!(format_value(1234.5), "1234.50");
    }
}
