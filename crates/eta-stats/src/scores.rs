//! Standardized and rescaled deviation scores.

use serde::{Deserialize, Serialize};

use crate::{
    descriptive::{self, Correction},
    error::{Denominator, StatsError, StatsResult},
};

/// Target mean and spread for [`deviation_scores_with`].
///
/// The default is the T-score convention, mean 50 and standard deviation 10.
///
/// # Examples
///
/// ```
/// use eta_stats::scores::DeviationScale;
///
/// assert_eq!(DeviationScale::default(), DeviationScale::new(50.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationScale {
    /// Mean of the rescaled scores.
    pub mean: f64,
    /// Standard deviation of the rescaled scores.
    pub std_dev: f64,
}

impl Default for DeviationScale {
    fn default() -> Self {
        Self::new(50.0, 10.0)
    }
}

impl DeviationScale {
    /// Creates a scale with the given target mean and standard deviation.
    #[must_use]
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

/// Computes the standard score (z-score) of each value, `(x - mean) / std_dev`.
///
/// Uses the population standard deviation. The result has the same length
/// and order as `nums`.
///
/// # Returns
///
/// * `Ok(scores)` - with mean 0 and population standard deviation 1
/// * `Err(StatsError::EmptyInput)` - if `nums` is empty
/// * `Err(StatsError::NonFinite { .. })` - if `nums` contains `NaN` or an infinity
/// * `Err(StatsError::DivisionByZero { .. })` - if all values are identical
/// * `Err(StatsError::Overflow)` - if a deviation from the mean exceeds `f64::MAX`
///
/// # Examples
///
/// ```
/// # use eta_stats::scores::standard_scores;
/// let scores = standard_scores(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(scores, vec![-1.5, -0.5, -0.5, -0.5, 0.0, 0.0, 1.0, 2.0]);
/// ```
pub fn standard_scores(nums: &[f64]) -> StatsResult<Vec<f64>> {
    let average = descriptive::mean(nums)?;
    let std_dev = descriptive::standard_deviation(nums, Correction::Population)?;
    if std_dev == 0.0 {
        return Err(StatsError::DivisionByZero {
            denominator: Denominator::StandardDeviation,
        });
    }
    Ok(nums.iter().map(|num| (num - average) / std_dev).collect())
}

/// Rescales standard scores to the default [`DeviationScale`] (mean 50, standard deviation 10).
///
/// # Examples
///
/// ```
/// # use eta_stats::scores::deviation_scores;
/// let scores = deviation_scores(&[1.0, 3.0]).unwrap();
/// assert_eq!(scores, vec![40.0, 60.0]);
/// ```
pub fn deviation_scores(nums: &[f64]) -> StatsResult<Vec<f64>> {
    deviation_scores_with(nums, DeviationScale::default())
}

/// Rescales standard scores to an arbitrary target, `z * scale.std_dev + scale.mean`.
///
/// # Errors
///
/// Fails under the same conditions as [`standard_scores`], and with
/// [`StatsError::Overflow`] if a rescaled score exceeds `f64::MAX`.
///
/// # Examples
///
/// ```
/// # use eta_stats::scores::{DeviationScale, deviation_scores_with};
/// let scores = deviation_scores_with(&[1.0, 3.0], DeviationScale::new(100.0, 15.0)).unwrap();
/// assert_eq!(scores, vec![85.0, 115.0]);
/// ```
pub fn deviation_scores_with(nums: &[f64], scale: DeviationScale) -> StatsResult<Vec<f64>> {
    let scores = standard_scores(nums)?
        .into_iter()
        .map(|score| score * scale.std_dev + scale.mean)
        .collect::<Vec<_>>();
    if scores.iter().any(|score| !score.is_finite()) {
        return Err(StatsError::Overflow);
    }
    Ok(scores)
}
