//! Spread of the samples that survive trimming.
//!
//! The trimmed mean is the headline number; these figures say how tightly
//! the kept runs agree with each other.

use serde::{Deserialize, Serialize};

use super::trimmed::sorted;

/// Calculate a percentile from a slice of samples.
///
/// Uses linear interpolation between nearest ranks.
///
/// # Returns
///
/// * `Some(value)` - The percentile value
/// * `None` - If samples is empty or p is outside 0..=100
///
/// # Examples
///
/// ```
/// use perflog::stats::percentile;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile(&data, 50.0), Some(3.0));
/// ```
pub fn percentile(samples: &[f64], p: f64) -> Option<f64> {
    if samples.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    let sorted = sorted(samples);

    if sorted.len() == 1 {
        return Some(sorted[0]);
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower_index = rank.floor() as usize;
    let upper_index = rank.ceil() as usize;

    if lower_index == upper_index {
        Some(sorted[lower_index])
    } else {
        let lower_value = sorted[lower_index];
        let upper_value = sorted[upper_index];
        let fraction = rank - lower_index as f64;
        Some(lower_value + fraction * (upper_value - lower_value))
    }
}

/// Min, median, max and dispersion of a sample set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadSummary {
    pub min: f64,
    pub p50: f64, // median
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    pub count: usize,
}

impl SpreadSummary {
    /// Compute the spread of `samples`, or `None` if there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use perflog::stats::SpreadSummary;
    ///
    /// let spread = SpreadSummary::from_samples(&[2.0, 4.0, 6.0]).unwrap();
    /// assert_eq!(spread.p50, 4.0);
    /// assert_eq!(spread.std_dev, 2.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let sorted = sorted(samples);
        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;

        let variance = if count > 1 {
            let squared_diffs: f64 = sorted.iter().map(|&x| (x - mean).powi(2)).sum();
            squared_diffs / (count - 1) as f64
        } else {
            0.0
        };

        Some(SpreadSummary {
            min: sorted[0],
            p50: percentile(&sorted, 50.0)?,
            max: sorted[count - 1],
            mean,
            std_dev: variance.sqrt(),
            count,
        })
    }

    /// Coefficient of variation (std_dev / mean), `f64::INFINITY` for a zero mean.
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            f64::INFINITY
        } else {
            self.std_dev / self.mean.abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_empty_samples() {
        assert_eq!(percentile(&[], 50.0), None);
    }

    #[test]
    fn test_percentile_invalid_p() {
        let samples = vec![1.0, 2.0, 3.0];
        assert_eq!(percentile(&samples, -1.0), None);
        assert_eq!(percentile(&samples, 101.0), None);
    }

    #[test]
    fn test_percentile_with_interpolation() {
        let samples = vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(percentile(&samples, 50.0), Some(5.5));
        assert_eq!(percentile(&samples, 0.0), Some(2.0));
        assert_eq!(percentile(&samples, 100.0), Some(9.0));
    }

    #[test]
    fn test_percentile_unsorted_samples() {
        let samples = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        assert_eq!(percentile(&samples, 50.0), Some(3.0));
    }

    #[test]
    fn test_spread_empty() {
        assert!(SpreadSummary::from_samples(&[]).is_none());
    }

    #[test]
    fn test_spread_single_sample() {
        let spread = SpreadSummary::from_samples(&[42.0]).unwrap();
        assert_eq!(spread.count, 1);
        assert_eq!(spread.min, 42.0);
        assert_eq!(spread.max, 42.0);
        assert_eq!(spread.std_dev, 0.0);
    }

    #[test]
    fn test_spread_mean_and_std_dev() {
        let samples = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let spread = SpreadSummary::from_samples(&samples).unwrap();

        assert_eq!(spread.mean, 5.0);
        let expected_std_dev = (32.0_f64 / 7.0).sqrt();
        assert!((spread.std_dev - expected_std_dev).abs() < 1e-10);
    }

    #[test]
    fn test_coefficient_of_variation() {
        let spread = SpreadSummary::from_samples(&[10.0, 12.0, 14.0, 16.0, 18.0]).unwrap();
        let cv = spread.coefficient_of_variation();
        assert!(cv > 0.0 && cv < 1.0);
    }

    #[test]
    fn test_coefficient_of_variation_zero_mean() {
        let spread = SpreadSummary::from_samples(&[-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(spread.coefficient_of_variation(), f64::INFINITY);
    }

    #[test]
    fn test_coefficient_of_variation_constant() {
        let spread = SpreadSummary::from_samples(&[100.0; 8]).unwrap();
        assert_eq!(spread.coefficient_of_variation(), 0.0);
    }
}
