//! Statistics over per-metric sample series
//!
//! The central routine is the trimmed mean: sort, drop one minimum and one
//! maximum, average the rest. It is shared by every recipe.
//!
//! # Examples
//!
//! ```
//! use perflog::stats::{SpreadSummary, TrimmedMean};
//!
//! let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
//!
//! let trimmed = TrimmedMean::from_samples(&samples).unwrap();
//! assert_eq!(trimmed.mean, 5.5);
//!
//! let spread = SpreadSummary::from_samples(&trimmed.kept).unwrap();
//! println!("median: {}, std dev: {}", spread.p50, spread.std_dev);
//! ```

pub mod spread;
pub mod trimmed;

pub use spread::{percentile, SpreadSummary};
pub use trimmed::{trim_extremes, trimmed_mean, TrimmedMean};
