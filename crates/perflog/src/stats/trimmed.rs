//! Trimmed mean: drop the single lowest and single highest sample, average
//! the rest.

/// Sort ascending using the IEEE total order, so NaN never panics the sort.
pub(crate) fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Sort `samples` and remove exactly one minimum and one maximum.
///
/// When the extremes are duplicated only one instance of each is removed.
///
/// # Returns
///
/// * `Some(kept)` - The remaining samples, sorted ascending
/// * `None` - If fewer than 3 samples were given
///
/// # Examples
///
/// ```
/// use perflog::stats::trim_extremes;
///
/// let kept = trim_extremes(&[3.0, 1.0, 1.0, 9.0, 9.0]).unwrap();
/// assert_eq!(kept, vec![1.0, 3.0, 9.0]);
/// ```
pub fn trim_extremes(samples: &[f64]) -> Option<Vec<f64>> {
    if samples.len() < 3 {
        return None;
    }

    let mut kept = sorted(samples);
    kept.pop();
    kept.remove(0);
    Some(kept)
}

/// Arithmetic mean of `samples` after [`trim_extremes`].
///
/// # Examples
///
/// ```
/// use perflog::stats::trimmed_mean;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
/// assert_eq!(trimmed_mean(&data), Some(5.5));
/// ```
pub fn trimmed_mean(samples: &[f64]) -> Option<f64> {
    TrimmedMean::from_samples(samples).map(|t| t.mean)
}

/// Result of trimming one metric's samples
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedMean {
    /// Mean of the kept samples
    pub mean: f64,
    /// The minimum that was discarded
    pub dropped_min: f64,
    /// The maximum that was discarded
    pub dropped_max: f64,
    /// Samples that remain, sorted ascending
    pub kept: Vec<f64>,
}

impl TrimmedMean {
    /// Trim `samples` and average what is left.
    ///
    /// Returns `None` if fewer than 3 samples were given.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.len() < 3 {
            return None;
        }

        let all = sorted(samples);
        let kept = all[1..all.len() - 1].to_vec();

        let n = kept.len() as f64;
        let mean = if kept[0] == kept[kept.len() - 1] {
            // A run of identical values is its own mean.
            kept[0]
        } else {
            let sum: f64 = kept.iter().sum();
            if sum.is_finite() {
                sum / n
            } else {
                // Near f64::MAX the running sum overflows; scale first.
                kept.iter().map(|v| v / n).sum()
            }
        };

        Some(TrimmedMean {
            mean,
            dropped_min: all[0],
            dropped_max: all[all.len() - 1],
            kept,
        })
    }
}
