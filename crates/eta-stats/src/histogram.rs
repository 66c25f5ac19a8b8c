//! Histogram sizing with Sturges' Rule.
//!
//! Sturges' Rule picks `ceil(1 + log2(n))` buckets for `n` approximately
//! normally distributed values. [`sturges_rule_bucket_range`] turns that count
//! into a bucket width and [`Histogram::sturges`] fills the buckets.

use std::ops::Range;

use serde::Serialize;

use crate::error::{self, StatsError, StatsResult};

/// Returns the number of histogram buckets for `size_of_data` values, `ceil(1 + log2(n))`.
///
/// # Returns
///
/// * `Ok(buckets)` - at least 1
/// * `Err(StatsError::Domain { .. })` - if `size_of_data` is zero (the logarithm is undefined)
///
/// # Examples
///
/// ```
/// # use eta_stats::histogram::sturges_rule_buckets;
/// assert_eq!(sturges_rule_buckets(1).unwrap(), 1);
/// assert_eq!(sturges_rule_buckets(8).unwrap(), 4);
/// assert_eq!(sturges_rule_buckets(9).unwrap(), 5);
/// assert!(sturges_rule_buckets(0).is_err());
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub fn sturges_rule_buckets(size_of_data: usize) -> StatsResult<usize> {
    if size_of_data == 0 {
        return Err(StatsError::Domain { size: size_of_data });
    }
    Ok((1.0 + (size_of_data as f64).log2()).ceil() as usize)
}

/// Returns the width each bucket spans, `(max - min) / sturges_rule_buckets(len)`.
///
/// When `max - min` exceeds `f64::MAX` the bounds are divided before they are
/// subtracted, so the width of finite data is always finite.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] - if `nums` is empty
/// * [`StatsError::NonFinite`] - if `nums` contains `NaN` or an infinity
///
/// # Examples
///
/// ```
/// # use eta_stats::histogram::sturges_rule_bucket_range;
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// // 8 values -> 4 buckets over a range of 7
/// assert_eq!(sturges_rule_bucket_range(&values).unwrap(), 1.75);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sturges_rule_bucket_range(nums: &[f64]) -> StatsResult<f64> {
    error::check_values(nums.iter().copied())?;
    let buckets = sturges_rule_buckets(nums.len())?;
    let (min, max) = bounds(nums);
    let buckets = buckets as f64;
    let width = (max - min) / buckets;
    if width.is_finite() {
        Ok(width)
    } else {
        Ok(max / buckets - min / buckets)
    }
}

fn bounds(nums: &[f64]) -> (f64, f64) {
    let min = nums.iter().copied().fold(f64::INFINITY, f64::min);
    let max = nums.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

/// An equal-width histogram whose bucket count follows Sturges' Rule.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    /// The bins in ascending order, covering `min..=max` of the data.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a [`Histogram`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Builds a histogram with [`sturges_rule_buckets`] bins of width
    /// [`sturges_rule_bucket_range`].
    ///
    /// The last bin ends just above the maximum so that it is included.
    /// Constant data, or a spread too narrow to split into bins, produces a
    /// single bin holding every value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eta_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 2.5, 3.0, 4.0, 6.0, 7.5, 9.0];
    /// let histogram = Histogram::sturges(&values).unwrap();
    /// assert_eq!(histogram.bins.len(), 4);
    /// assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<u64>(), 8);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn sturges(nums: &[f64]) -> StatsResult<Self> {
        let width = sturges_rule_bucket_range(nums)?;
        let (min, max) = bounds(nums);

        if width == 0.0 {
            return Ok(Self {
                bins: vec![HistogramBin {
                    range: min..max.next_up(),
                    count: nums.len() as u64,
                }],
            });
        }

        // Recompute each edge from `min` to avoid accumulating rounding error
        let edge = |bin_idx: usize| {
            let edge = min + bin_idx as f64 * width;
            if edge.is_finite() {
                edge
            } else {
                (min / 2.0 + bin_idx as f64 * (width / 2.0)) * 2.0
            }
        };

        let num_bins = sturges_rule_buckets(nums.len())?;
        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                let start = edge(bin_idx);
                let end = if bin_idx == num_bins - 1 {
                    max.next_up()
                } else {
                    edge(bin_idx + 1)
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in nums {
            let offset = val - min;
            let position = if offset.is_finite() {
                offset / width
            } else {
                val / width - min / width
            };
            let idx = (position.floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Ok(Self { bins })
    }
}
