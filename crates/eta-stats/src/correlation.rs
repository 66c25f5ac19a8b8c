//! Pearson correlation coefficient for paired numeric data.

use crate::{
    descriptive,
    error::{Denominator, StatsError, StatsResult},
};

/// Computes the Pearson correlation coefficient of `(x, y)` pairs.
///
/// `r = Σ(dx·dy) / sqrt(Σdx² · Σdy²)` with `dx = x - mean(xs)` and
/// `dy = y - mean(ys)`. The result lies in `[-1, 1]` up to floating-point
/// rounding and is not clamped.
///
/// Since `r` does not depend on the units of either variable, each side's
/// deviations are divided by their largest magnitude before they are
/// multiplied. Values near `f64::MAX` or in the subnormal range therefore
/// give the same `r` as moderate ones.
///
/// # Returns
///
/// * `Ok(r)` - the correlation coefficient
/// * `Err(StatsError::EmptyInput)` - if `pairs` is empty
/// * `Err(StatsError::NonFinite { index })` - if pair `index` holds `NaN` or an infinity
/// * `Err(StatsError::DivisionByZero { .. })` - if all x or all y values are equal,
///   which includes a single pair
/// * `Err(StatsError::Overflow)` - if a deviation from the mean exceeds `f64::MAX`
///
/// # Examples
///
/// ```
/// # use eta_stats::correlation::correlation_coefficient;
/// let pairs = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0)];
/// assert_eq!(correlation_coefficient(&pairs).unwrap(), 1.0);
///
/// let pairs = [(1.0, 8.0), (2.0, 6.0), (3.0, 4.0), (4.0, 2.0)];
/// assert_eq!(correlation_coefficient(&pairs).unwrap(), -1.0);
/// ```
pub fn correlation_coefficient(pairs: &[(f64, f64)]) -> StatsResult<f64> {
    pearson(pairs.iter().copied())
}

/// Computes the Pearson correlation coefficient of two parallel series.
///
/// Equivalent to [`correlation_coefficient`] over `xs.zip(ys)`.
///
/// # Errors
///
/// Returns [`StatsError::LengthMismatch`] if `xs` and `ys` differ in length,
/// otherwise fails like [`correlation_coefficient`].
///
/// # Examples
///
/// ```
/// # use eta_stats::correlation::correlation_coefficient_xy;
/// let r = correlation_coefficient_xy(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 1.0, 4.0, 3.0, 5.0]).unwrap();
/// assert!((r - 0.8).abs() < 1e-12);
/// ```
pub fn correlation_coefficient_xy(xs: &[f64], ys: &[f64]) -> StatsResult<f64> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    pearson(xs.iter().copied().zip(ys.iter().copied()))
}

fn pearson<I>(pairs: I) -> StatsResult<f64>
where
    I: Iterator<Item = (f64, f64)> + Clone,
{
    // Report the first offending pair, whichever side it is on
    let mut len = 0_usize;
    for (index, (x, y)) in pairs.clone().enumerate() {
        if !x.is_finite() || !y.is_finite() {
            return Err(StatsError::NonFinite { index });
        }
        len += 1;
    }
    if len == 0 {
        return Err(StatsError::EmptyInput);
    }

    let mean_x = descriptive::mean_unchecked(pairs.clone().map(|(x, _)| x));
    let mean_y = descriptive::mean_unchecked(pairs.clone().map(|(_, y)| y));

    let (scale_x, scale_y) = pairs.clone().fold((0.0_f64, 0.0_f64), |(sx, sy), (x, y)| {
        (sx.max((x - mean_x).abs()), sy.max((y - mean_y).abs()))
    });
    if !scale_x.is_finite() || !scale_y.is_finite() {
        return Err(StatsError::Overflow);
    }
    if scale_x == 0.0 {
        return Err(StatsError::DivisionByZero {
            denominator: Denominator::XSumOfSquares,
        });
    }
    if scale_y == 0.0 {
        return Err(StatsError::DivisionByZero {
            denominator: Denominator::YSumOfSquares,
        });
    }

    // Scaled deviations lie in [-1, 1], so every sum stays within [0, len]
    let (numerator, sum_x_squares, sum_y_squares) =
        pairs.fold((0.0, 0.0, 0.0), |(cov, sx, sy), (x, y)| {
            let dx = (x - mean_x) / scale_x;
            let dy = (y - mean_y) / scale_y;
            (cov + dx * dy, sx + dx * dx, sy + dy * dy)
        });

    Ok(numerator / (sum_x_squares * sum_y_squares).sqrt())
}
