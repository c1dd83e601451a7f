//! JSON reporter for summaries

use crate::summary::Summary;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a summary as JSON, optionally pretty-printed
    pub fn format(summary: &Summary, pretty: bool) -> Result<String> {
        let mut output = if pretty {
            serde_json::to_string_pretty(summary)?
        } else {
            serde_json::to_string(summary)?
        };
        output.push('\n');
        Ok(output)
    }
}
