//! Central tendency and dispersion of a numeric sequence.

use serde::{Deserialize, Serialize};

use crate::error::{self, Denominator, StatsError, StatsResult};

/// Denominator used when averaging squared deviations.
///
/// # Examples
///
/// ```
/// use eta_stats::descriptive::Correction;
///
/// assert_eq!(Correction::default(), Correction::Population);
/// assert_eq!(Correction::from(true), Correction::Bessel);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correction {
    /// Divide by `n`: the data is the entire population.
    #[default]
    Population,
    /// Divide by `n - 1` (Bessel's correction): the data is a sample of a larger population.
    Bessel,
}

impl From<bool> for Correction {
    fn from(bessel: bool) -> Self {
        if bessel { Self::Bessel } else { Self::Population }
    }
}

impl Correction {
    /// Returns the divisor for `count` squared deviations, or `None` if it would be zero.
    fn divisor(self, count: usize) -> Option<usize> {
        let divisor = match self {
            Self::Population => count,
            Self::Bessel => count.checked_sub(1)?,
        };
        (divisor > 0).then_some(divisor)
    }
}

/// Computes the arithmetic mean, `sum / count`.
///
/// When every element is bit-identical the element itself is returned, so
/// the mean of constant data is exact and its deviations are exactly zero.
/// If the running sum leaves the range of `f64`, each value is divided by
/// the count before summing instead, so the mean of finite values is always
/// finite.
///
/// # Arguments
///
/// * `nums` - The values to average
///
/// # Returns
///
/// * `Ok(mean)` - if `nums` is non-empty and every value is finite
/// * `Err(StatsError::EmptyInput)` - if `nums` is empty
/// * `Err(StatsError::NonFinite { .. })` - if `nums` contains `NaN` or an infinity
///
/// # Examples
///
/// ```
/// # use eta_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// assert_eq!(mean(&[f64::MAX, f64::MAX]).unwrap(), f64::MAX);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(nums: &[f64]) -> StatsResult<f64> {
    error::check_values(nums.iter().copied())?;
    Ok(mean_unchecked(nums.iter().copied()))
}

/// Mean of values already known to be non-empty and finite.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn mean_unchecked<I>(values: I) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let mut first = None;
    let mut constant = true;
    let mut count = 0_usize;
    let mut sum = 0.0;
    for value in values.clone() {
        let head = *first.get_or_insert(value);
        constant &= value.to_bits() == head.to_bits();
        count += 1;
        sum += value;
    }
    debug_assert!(count > 0, "mean of an empty sequence");

    match first {
        Some(first) if constant => first,
        _ if sum.is_finite() => sum / count as f64,
        _ => {
            let count = count as f64;
            values.map(|value| value / count).sum()
        }
    }
}

/// Variance split as `scale² * scaled`, where `scale` is the largest
/// absolute deviation from the mean.
///
/// Deviations are divided by `scale` before squaring so that neither the
/// squares nor their sum can overflow or underflow.
#[expect(clippy::cast_precision_loss)]
fn scaled_variance(nums: &[f64], correction: Correction) -> StatsResult<(f64, f64)> {
    let average = mean(nums)?;
    let divisor = correction
        .divisor(nums.len())
        .ok_or(StatsError::DivisionByZero {
            denominator: Denominator::SampleCount,
        })?;

    let scale = nums
        .iter()
        .map(|v| (v - average).abs())
        .fold(0.0, f64::max);
    if !scale.is_finite() {
        return Err(StatsError::Overflow);
    }
    if scale == 0.0 {
        return Ok((0.0, 0.0));
    }
    let sum_of_squares = nums
        .iter()
        .map(|v| ((v - average) / scale).powi(2))
        .sum::<f64>();
    Ok((scale, sum_of_squares / divisor as f64))
}

/// Computes the variance, the mean squared deviation from [`mean`].
///
/// With [`Correction::Bessel`] the squared deviations are divided by `n - 1`
/// instead of `n`.
///
/// # Returns
///
/// * `Ok(variance)` - always finite and non-negative
/// * `Err(StatsError::EmptyInput)` - if `nums` is empty
/// * `Err(StatsError::NonFinite { .. })` - if `nums` contains `NaN` or an infinity
/// * `Err(StatsError::DivisionByZero { .. })` - with Bessel's correction and a single value
/// * `Err(StatsError::Overflow)` - if the variance exceeds `f64::MAX`
///
/// # Examples
///
/// ```
/// # use eta_stats::descriptive::{Correction, variance};
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&values, Correction::Population).unwrap(), 4.0);
/// ```
pub fn variance(nums: &[f64], correction: Correction) -> StatsResult<f64> {
    let (scale, scaled) = scaled_variance(nums, correction)?;
    let variance = scale * scaled * scale;
    if !variance.is_finite() {
        return Err(StatsError::Overflow);
    }
    Ok(variance)
}

/// Computes the standard deviation, the square root of [`variance`].
///
/// Population standard deviation is the default; pass [`Correction::Bessel`]
/// when `nums` is a sample of a larger population. The result is computed
/// without squaring the raw deviations, so it is available whenever the
/// deviations themselves fit in `f64`, even if the variance does not.
///
/// # Errors
///
/// Fails like [`variance`], except that [`StatsError::Overflow`] is returned
/// only when a deviation from the mean or the result itself exceeds `f64::MAX`.
///
/// # Examples
///
/// ```
/// # use eta_stats::descriptive::{Correction, standard_deviation};
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(standard_deviation(&values, Correction::Population).unwrap(), 2.0);
///
/// let sample = standard_deviation(&values, Correction::Bessel).unwrap();
/// assert!((sample - 2.138_089_935_299_395).abs() < 1e-12);
/// ```
pub fn standard_deviation(nums: &[f64], correction: Correction) -> StatsResult<f64> {
    let (scale, scaled) = scaled_variance(nums, correction)?;
    let std_dev = scale * scaled.sqrt();
    if !std_dev.is_finite() {
        return Err(StatsError::Overflow);
    }
    Ok(std_dev)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    mod mean {
        use super::*;

        #[test]
        fn test_known_value() {
            assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
        }

        #[test]
        fn test_single_value_is_returned() {
            assert_eq!(mean(&[0.1]).unwrap(), 0.1);
            assert_eq!(mean(&[-7.25]).unwrap(), -7.25);
        }

        #[test]
        fn test_constant_data_is_exact() {
            // A naive sum / n gives 0.10000000000000002 here
            assert_eq!(mean(&[0.1, 0.1, 0.1]).unwrap(), 0.1);
        }

        #[test]
        fn test_empty_fails() {
            assert_eq!(mean(&[]), Err(StatsError::EmptyInput));
        }

        #[test]
        fn test_non_finite_fails() {
            assert_eq!(
                mean(&[1.0, f64::NAN]),
                Err(StatsError::NonFinite { index: 1 })
            );
        }

        #[test]
        fn test_sum_beyond_max_stays_finite() {
            assert_relative_eq!(
                mean(&[f64::MAX, f64::MAX / 2.0]).unwrap(),
                f64::MAX * 0.75,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                mean(&[-f64::MAX, -f64::MAX, -f64::MAX / 2.0]).unwrap(),
                -f64::MAX / 6.0 * 5.0,
                max_relative = 1e-12
            );
        }

        #[test]
        fn test_opposite_extremes_cancel() {
            assert_eq!(mean(&[f64::MAX, -f64::MAX]).unwrap(), 0.0);
        }

        #[test]
        fn test_subnormal_values() {
            let tiny = f64::from_bits(1);
            assert_eq!(mean(&[tiny, tiny * 3.0]).unwrap(), tiny * 2.0);
            assert_eq!(mean(&[0.0, 1e-310]).unwrap(), 1e-310 / 2.0);
        }
    }

    mod standard_deviation {
        use super::*;

        const VALUES: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        #[test]
        fn test_population() {
            assert_eq!(
                standard_deviation(&VALUES, Correction::Population).unwrap(),
                2.0
            );
        }

        #[test]
        fn test_bessel() {
            // sqrt(32 / 7)
            assert_relative_eq!(
                standard_deviation(&VALUES, Correction::Bessel).unwrap(),
                (32.0_f64 / 7.0).sqrt()
            );
        }

        #[test]
        fn test_bessel_not_smaller_than_population() {
            let population = standard_deviation(&VALUES, Correction::Population).unwrap();
            let sample = standard_deviation(&VALUES, Correction::Bessel).unwrap();
            assert!(population <= sample);
        }

        #[test]
        fn test_constant_data_is_zero() {
            let values = [0.3; 6];
            assert_eq!(
                standard_deviation(&values, Correction::Population).unwrap(),
                0.0
            );
            assert_eq!(standard_deviation(&values, Correction::Bessel).unwrap(), 0.0);
        }

        #[test]
        fn test_single_value() {
            assert_eq!(
                standard_deviation(&[5.0], Correction::Population).unwrap(),
                0.0
            );
            assert_eq!(
                standard_deviation(&[5.0], Correction::Bessel),
                Err(StatsError::DivisionByZero {
                    denominator: Denominator::SampleCount
                })
            );
        }

        #[test]
        fn test_empty_fails() {
            assert_eq!(
                standard_deviation(&[], Correction::Population),
                Err(StatsError::EmptyInput)
            );
            assert_eq!(
                standard_deviation(&[], Correction::Bessel),
                Err(StatsError::EmptyInput)
            );
        }

        #[test]
        fn test_large_magnitudes() {
            let values = [1e200, -1e200];
            assert_eq!(
                standard_deviation(&values, Correction::Population).unwrap(),
                1e200
            );
            // 1e400 is not representable
            assert_eq!(
                variance(&values, Correction::Population),
                Err(StatsError::Overflow)
            );
        }

        #[test]
        fn test_extremes_of_range() {
            let values = [f64::MAX, -f64::MAX];
            assert_eq!(
                standard_deviation(&values, Correction::Population).unwrap(),
                f64::MAX
            );
            // sqrt(2) * f64::MAX
            assert_eq!(
                standard_deviation(&values, Correction::Bessel),
                Err(StatsError::Overflow)
            );
        }

        #[test]
        fn test_deviation_beyond_max_fails() {
            let values = [f64::MAX, -f64::MAX, -f64::MAX];
            assert_eq!(
                standard_deviation(&values, Correction::Population),
                Err(StatsError::Overflow)
            );
            assert_eq!(
                variance(&values, Correction::Population),
                Err(StatsError::Overflow)
            );
        }

        #[test]
        fn test_subnormal_spread_is_not_zero() {
            // Squaring these deviations directly underflows to zero
            let std = standard_deviation(&[0.0, 1e-310], Correction::Population).unwrap();
            assert_relative_eq!(std, 5e-311, max_relative = 1e-9);

            let std = standard_deviation(&[1e-170, -1e-170, 3e-170], Correction::Bessel).unwrap();
            assert!(std.is_finite() && std > 1e-170, "std = {std}");
        }

        #[test]
        fn test_is_sqrt_of_variance() {
            let var = variance(&VALUES, Correction::Bessel).unwrap();
            let std = standard_deviation(&VALUES, Correction::Bessel).unwrap();
            assert_relative_eq!(std * std, var, epsilon = 1e-12);
        }
    }

    mod correction {
        use super::*;

        #[test]
        fn test_from_bool() {
            assert_eq!(Correction::from(false), Correction::Population);
            assert_eq!(Correction::from(true), Correction::Bessel);
        }

        #[test]
        fn test_divisor() {
            assert_eq!(Correction::Population.divisor(0), None);
            assert_eq!(Correction::Population.divisor(3), Some(3));
            assert_eq!(Correction::Bessel.divisor(0), None);
            assert_eq!(Correction::Bessel.divisor(1), None);
            assert_eq!(Correction::Bessel.divisor(3), Some(2));
        }

        #[test]
        fn test_serde_names() {
            let json = serde_json::to_string(&Correction::Bessel).unwrap();
            assert_eq!(json, "\"bessel\"");
            let parsed: Correction = serde_json::from_str("\"population\"").unwrap();
            assert_eq!(parsed, Correction::Population);
        }
    }
}
