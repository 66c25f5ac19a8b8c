//! Descriptive statistics and bivariate association measures.
//!
//! This crate provides a small set of pure functions over in-memory `f64` data:
//!
//! - **Descriptive statistics**: mean, variance, and standard deviation (population or Bessel-corrected)
//! - **Histogram sizing**: bucket count and bucket width by Sturges' Rule, and a histogram built from them
//! - **Score transforms**: standard (z) scores and deviation scores rescaled to a target mean and spread
//! - **Correlation coefficient**: Pearson's r for paired numeric data
//! - **Correlation ratio**: eta-squared for numeric data grouped by a categorical label
//!
//! Every function validates its input and returns a [`StatsError`] for empty,
//! non-finite, or degenerate (constant) data instead of producing `NaN`.
//! Deviations are rescaled before they are squared, so magnitudes near
//! `f64::MAX` or in the subnormal range give finite results, and a statistic
//! that genuinely exceeds the range of `f64` fails with [`StatsError::Overflow`].
//!
//! # Modules
//!
//! - [`descriptive`]: Central tendency and dispersion
//! - [`histogram`]: Sturges' Rule and equal-width histograms
//! - [`scores`]: Standard and deviation scores
//! - [`correlation`]: Pearson correlation coefficient
//! - [`ratio`]: Correlation ratio and its variance decomposition
//! - [`error`]: Error values shared by all of the above
//!
//! # Examples
//!
//! ## Mean and standard deviation
//!
//! ```
//! use eta_stats::{Correction, mean, standard_deviation};
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&values).unwrap(), 5.0);
//! assert_eq!(standard_deviation(&values, Correction::Population).unwrap(), 2.0);
//! ```
//!
//! ## Histogram sizing
//!
//! ```
//! use eta_stats::{sturges_rule_bucket_range, sturges_rule_buckets};
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(sturges_rule_buckets(values.len()).unwrap(), 4);
//! assert_eq!(sturges_rule_bucket_range(&values).unwrap(), 1.75);
//! ```
//!
//! ## Score transforms
//!
//! ```
//! use eta_stats::{DeviationScale, deviation_scores_with, standard_scores};
//!
//! let values = [1.0, 2.0, 3.0];
//! let z = standard_scores(&values).unwrap();
//! assert_eq!(z[1], 0.0);
//!
//! let iq = deviation_scores_with(&values, DeviationScale::new(100.0, 15.0)).unwrap();
//! assert_eq!(iq[1], 100.0);
//! ```
//!
//! ## Association between variables
//!
//! ```
//! use eta_stats::{correlation_coefficient, correlation_ratio};
//!
//! let r = correlation_coefficient(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0)]).unwrap();
//! assert_eq!(r, 1.0);
//!
//! let eta_squared = correlation_ratio([(1.0, "a"), (1.0, "a"), (5.0, "b"), (5.0, "b")]).unwrap();
//! assert_eq!(eta_squared, 1.0);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod error;
pub mod histogram;
pub mod ratio;
pub mod scores;

pub use self::{
    correlation::{correlation_coefficient, correlation_coefficient_xy},
    descriptive::{Correction, mean, standard_deviation, variance},
    error::{Denominator, StatsError, StatsResult},
    histogram::{Histogram, HistogramBin, sturges_rule_bucket_range, sturges_rule_buckets},
    ratio::{CategorySummary, VarianceDecomposition, correlation_ratio, decompose_variance},
    scores::{DeviationScale, deviation_scores, deviation_scores_with, standard_scores},
};
