//! Plain reporter: one trimmed mean per line

use anyhow::Result;
use std::fmt::Write;

use crate::summary::Summary;

/// Plain format reporter
pub struct PlainReporter;

impl PlainReporter {
    /// One line per metric, in recipe order, mean only.
    pub fn format(summary: &Summary) -> Result<String> {
        let mut output = String::new();
        for metric in &summary.metrics {
            writeln!(output, "{}", format_mean(metric.mean))?;
        }
        Ok(output)
    }
}

/// Shortest round-trip decimal form of `value`, keeping a `.0` on whole
/// numbers so the output always reads as a float.
///
/// Large and small magnitudes keep every significant digit instead of being
/// rounded to 12 digits in exponent form: `1e20` prints as
/// `100000000000000000000.0`, not `1e+20`.
///
/// ```
/// use perflog::reporter::format_mean;
///
/// assert_eq!(format_mean(5.5), "5.5");
/// assert_eq!(format_mean(1234.0), "1234.0");
/// assert_eq!(format_mean(0.1), "0.1");
/// ```
pub fn format_mean(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains(['.', 'e']) {
        format!("{}.0", text)
    } else {
        text
    }
}
