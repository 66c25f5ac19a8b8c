//! Correlation ratio (eta-squared) between a numeric and a categorical variable.
//!
//! Values are grouped by category and the total sum of squared deviations is
//! split into two parts:
//!
//! - **Intraclass variance**: squared deviations of each value from its own category mean
//! - **Interclass variance**: `count * (category mean - grand mean)²`, summed over categories
//!
//! The correlation ratio is `interclass / (intraclass + interclass)`, the
//! fraction of total variance explained by category membership.
//!
//! # Examples
//!
//! ```
//! use eta_stats::ratio::decompose_variance;
//!
//! let pairs = [(1.0, "a"), (3.0, "a"), (6.0, "b"), (8.0, "b")];
//! let decomposition = decompose_variance(pairs).unwrap();
//!
//! assert_eq!(decomposition.grand_mean, 4.5);
//! assert_eq!(decomposition.intraclass_variance, 4.0);
//! assert_eq!(decomposition.interclass_variance, 25.0);
//! assert_eq!(decomposition.ratio().unwrap(), 25.0 / 29.0);
//! ```

use std::{collections::HashMap, hash::Hash};

use serde::Serialize;

use crate::{
    descriptive,
    error::{Denominator, StatsError, StatsResult},
};

/// Per-category statistics gathered while computing the correlation ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary<K> {
    /// The category label.
    pub category: K,
    /// Number of values in the category.
    pub count: usize,
    /// Mean of the category's values.
    pub mean: f64,
    /// Squared deviation of each value from [`Self::mean`], in arrival order.
    pub squared_deviations: Vec<f64>,
}

impl<K> CategorySummary<K> {
    /// Sum of squared deviations from the category mean.
    #[must_use]
    pub fn sum_of_squares(&self) -> f64 {
        self.squared_deviations.iter().sum()
    }
}

/// Split of the total variance of a labeled dataset into within- and between-category parts.
///
/// Categories are listed in the order of their first appearance in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarianceDecomposition<K> {
    /// One summary per distinct category.
    pub categories: Vec<CategorySummary<K>>,
    /// Mean of all values regardless of category.
    pub grand_mean: f64,
    /// Sum of within-category squared deviations.
    pub intraclass_variance: f64,
    /// Sum of `count * (category mean - grand mean)²` over categories.
    pub interclass_variance: f64,
}

impl<K> VarianceDecomposition<K> {
    /// Returns the correlation ratio, `interclass / (intraclass + interclass)`.
    ///
    /// # Errors
    ///
    /// * [`StatsError::DivisionByZero`] - if the total variance is zero, which
    ///   happens when every value is identical or every squared deviation
    ///   underflows to zero
    /// * [`StatsError::Overflow`] - if the total variance exceeds `f64::MAX`
    pub fn ratio(&self) -> StatsResult<f64> {
        let total = self.intraclass_variance + self.interclass_variance;
        if !total.is_finite() {
            return Err(StatsError::Overflow);
        }
        if total == 0.0 {
            return Err(StatsError::DivisionByZero {
                denominator: Denominator::TotalVariance,
            });
        }
        Ok(self.interclass_variance / total)
    }
}

/// Groups `(value, category)` pairs by category and decomposes their variance.
///
/// Each category keeps its values in arrival order. The grand mean is the
/// mean of every value.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] - if `pairs` is empty
/// * [`StatsError::NonFinite`] - if a value is `NaN` or an infinity
/// * [`StatsError::Overflow`] - if either variance component exceeds `f64::MAX`
pub fn decompose_variance<I, K>(pairs: I) -> StatsResult<VarianceDecomposition<K>>
where
    I: IntoIterator<Item = (f64, K)>,
    K: Eq + Hash,
{
    // category -> (first appearance, values)
    let mut groups = HashMap::<K, (usize, Vec<f64>)>::new();
    let mut all_values = vec![];
    for (index, (value, category)) in pairs.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(StatsError::NonFinite { index });
        }
        all_values.push(value);
        let order = groups.len();
        groups
            .entry(category)
            .or_insert_with(|| (order, vec![]))
            .1
            .push(value);
    }
    let grand_mean = descriptive::mean(&all_values)?;

    let mut groups = groups.into_iter().collect::<Vec<_>>();
    groups.sort_unstable_by_key(|(_, (order, _))| *order);

    let mut categories = Vec::with_capacity(groups.len());
    let mut intraclass_variance = 0.0;
    for (category, (_, values)) in groups {
        let mean = descriptive::mean(&values)?;
        let squared_deviations = values
            .iter()
            .map(|value| (value - mean).powi(2))
            .collect::<Vec<_>>();
        let summary = CategorySummary {
            category,
            count: values.len(),
            mean,
            squared_deviations,
        };
        intraclass_variance += summary.sum_of_squares();
        categories.push(summary);
    }

    #[expect(clippy::cast_precision_loss)]
    let interclass_variance: f64 = categories
        .iter()
        .map(|c| c.count as f64 * (c.mean - grand_mean).powi(2))
        .sum();
    if !intraclass_variance.is_finite() || !interclass_variance.is_finite() {
        return Err(StatsError::Overflow);
    }

    Ok(VarianceDecomposition {
        categories,
        grand_mean,
        intraclass_variance,
        interclass_variance,
    })
}

/// Computes the correlation ratio (eta-squared) of `(value, category)` pairs.
///
/// The result lies in `[0, 1]`: 0 when every category has the same mean,
/// 1 when values never vary within a category.
///
/// # Errors
///
/// * [`StatsError::EmptyInput`] - if `pairs` is empty
/// * [`StatsError::NonFinite`] - if a value is `NaN` or an infinity
/// * [`StatsError::DivisionByZero`] - if every value is identical
/// * [`StatsError::Overflow`] - if the variance exceeds `f64::MAX`
///
/// # Examples
///
/// ```
/// # use eta_stats::ratio::correlation_ratio;
/// let pairs = [(1.0, 'a'), (1.0, 'a'), (5.0, 'b'), (5.0, 'b')];
/// assert_eq!(correlation_ratio(pairs).unwrap(), 1.0);
/// ```
pub fn correlation_ratio<I, K>(pairs: I) -> StatsResult<f64>
where
    I: IntoIterator<Item = (f64, K)>,
    K: Eq + Hash,
{
    decompose_variance(pairs)?.ratio()
}
