//! Turning one raw log line into a number.
//!
//! The line is taken as read from the file, terminator included, so the
//! strip count of a [`MetricSpec`] covers the newline plus any unit suffix
//! (`" \n"`, `" s\n"`, `" M\n"`).

use crate::config::{MetricSpec, NumericKind};
use crate::error::{Result, SummaryError};

/// Drop the last `count` characters of `line`.
///
/// Counting is done in characters, not bytes. Stripping at least as many
/// characters as the line holds yields an empty string.
///
/// ```
/// use perflog::extract::strip_trailing;
///
/// assert_eq!(strip_trailing("12,34 s\n", 3), "12,34");
/// assert_eq!(strip_trailing("7\n", 5), "");
/// ```
pub fn strip_trailing(line: &str, count: usize) -> &str {
    if count == 0 {
        return line;
    }
    match line.char_indices().rev().nth(count - 1) {
        Some((idx, _)) => &line[..idx],
        None => "",
    }
}

/// Apply the strip and separator rules of `spec`, returning the text that
/// will be handed to the number parser.
pub fn clean_text(line: &str, spec: &MetricSpec) -> String {
    let stripped = strip_trailing(line, spec.strip);
    spec.separator.apply(stripped).trim().to_string()
}

/// Extract the value of `spec` from one raw line of block `block`.
///
/// Integer metrics are parsed as `i64`, so fractional text is rejected even
/// though the returned sample is an `f64`.
pub fn extract_value(line: &str, spec: &MetricSpec, block: usize) -> Result<f64> {
    let text = clean_text(line, spec);

    let parsed = match spec.kind {
        NumericKind::Integer => text.parse::<i64>().ok().map(|v| v as f64),
        NumericKind::Float => text.parse::<f64>().ok(),
    };

    parsed.ok_or_else(|| SummaryError::InvalidNumber {
        block,
        metric: spec.name.clone(),
        kind: spec.kind,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeparatorRule;

    fn spec(kind: NumericKind, strip: usize, separator: SeparatorRule) -> MetricSpec {
        MetricSpec::new("metric", kind, strip, separator)
    }

    #[test]
    fn test_strip_trailing_basic() {
        assert_eq!(strip_trailing("1234 \n", 2), "1234");
        assert_eq!(strip_trailing("1,5 M\n", 3), "1,5");
        assert_eq!(strip_trailing("abc", 0), "abc");
    }

    #[test]
    fn test_strip_trailing_counts_chars() {
        // 'µ' is two bytes but one character
        assert_eq!(strip_trailing("3,2 µ\n", 3), "3,2");
    }

    #[test]
    fn test_strip_trailing_past_start() {
        assert_eq!(strip_trailing("ab", 2), "");
        assert_eq!(strip_trailing("ab", 3), "");
        assert_eq!(strip_trailing("", 2), "");
    }

    #[test]
    fn test_decimal_comma() {
        let value = extract_value(
            "12,34 \n",
            &spec(NumericKind::Float, 2, SeparatorRule::CommaToDot),
            0,
        )
        .unwrap();
        assert_eq!(value, 12.34);
    }

    #[test]
    fn test_thousands_separator() {
        let value = extract_value(
            "1.234 \n",
            &spec(NumericKind::Integer, 2, SeparatorRule::RemoveDots),
            0,
        )
        .unwrap();
        assert_eq!(value, 1234.0);
    }

    #[test]
    fn test_multiple_thousands_separators() {
        let value = extract_value(
            "12.345.678 \n",
            &spec(NumericKind::Integer, 2, SeparatorRule::RemoveDots),
            0,
        )
        .unwrap();
        assert_eq!(value, 12_345_678.0);
    }

    #[test]
    fn test_unit_suffix() {
        let value = extract_value(
            "0,5123 s\n",
            &spec(NumericKind::Float, 3, SeparatorRule::CommaToDot),
            0,
        )
        .unwrap();
        assert_eq!(value, 0.5123);
    }

    #[test]
    fn test_crlf_line_with_strip_two() {
        let value = extract_value(
            "4096\r\n",
            &spec(NumericKind::Integer, 2, SeparatorRule::Keep),
            0,
        )
        .unwrap();
        assert_eq!(value, 4096.0);
    }

    #[test]
    fn test_integer_rejects_fraction() {
        let err = extract_value(
            "1,5 \n",
            &spec(NumericKind::Integer, 2, SeparatorRule::CommaToDot),
            4,
        )
        .unwrap_err();

        match err {
            SummaryError::InvalidNumber {
                block, kind, text, ..
            } => {
                assert_eq!(block, 4);
                assert_eq!(kind, NumericKind::Integer);
                assert_eq!(text, "1.5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_text() {
        let result = extract_value(
            "12x4 \n",
            &spec(NumericKind::Float, 2, SeparatorRule::Keep),
            0,
        );
        assert!(matches!(result, Err(SummaryError::InvalidNumber { .. })));
    }

    #[test]
    fn test_empty_after_strip() {
        let result = extract_value(
            "\n",
            &spec(NumericKind::Float, 2, SeparatorRule::Keep),
            0,
        );
        assert!(matches!(result, Err(SummaryError::InvalidNumber { .. })));
    }

    #[test]
    fn test_error_message_names_metric() {
        let err = extract_value(
            "n/a \n",
            &MetricSpec::new("page_faults", NumericKind::Integer, 2, SeparatorRule::RemoveDots),
            7,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("block 7"));
        assert!(message.contains("page_faults"));
        assert!(message.contains("an integer"));
    }
}
