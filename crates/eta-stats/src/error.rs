//! Error values shared by every statistic in this crate.

/// Result type returned by every fallible statistic.
pub type StatsResult<T> = Result<T, StatsError>;

/// Reasons a statistic cannot be computed for the given input.
///
/// Every variant corresponds to a degenerate input the caller can detect
/// up front (empty data, constant data, non-finite values, magnitudes near
/// the limits of `f64`). Nothing is ever replaced by a sentinel such as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[non_exhaustive]
pub enum StatsError {
    /// The input contained no elements.
    #[display("input must contain at least one value")]
    EmptyInput,
    /// A computed denominator evaluated to zero.
    #[display("division by zero: {denominator} is zero")]
    DivisionByZero {
        /// The quantity that ended up in the denominator.
        denominator: Denominator,
    },
    /// Histogram sizing was requested for a non-positive number of elements.
    #[display("logarithm undefined for data size {size}")]
    Domain {
        /// The rejected data size.
        size: usize,
    },
    /// The input contained `NaN` or an infinity.
    #[display("non-finite value at index {index}")]
    NonFinite {
        /// Position of the first non-finite element.
        index: usize,
    },
    /// A deviation or statistic exceeded the range of `f64` although every input was finite.
    #[display("result exceeds the range of f64")]
    Overflow,
    /// Two parallel series had different lengths.
    #[display("series lengths differ ({xs} x values, {ys} y values)")]
    LengthMismatch {
        /// Length of the x series.
        xs: usize,
        /// Length of the y series.
        ys: usize,
    },
}

/// The quantity that was zero when a [`StatsError::DivisionByZero`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Denominator {
    /// `n - 1` with Bessel's correction and a single element.
    #[display("corrected sample count")]
    SampleCount,
    /// Population standard deviation of constant data.
    #[display("standard deviation")]
    StandardDeviation,
    /// Sum of squared x deviations (all x values equal).
    #[display("x sum of squares")]
    XSumOfSquares,
    /// Sum of squared y deviations (all y values equal).
    #[display("y sum of squares")]
    YSumOfSquares,
    /// Intraclass plus interclass variance (all values equal).
    #[display("total variance")]
    TotalVariance,
}

/// Rejects empty input and returns the position of the first non-finite value as an error.
pub(crate) fn check_values<I>(values: I) -> StatsResult<()>
where
    I: IntoIterator<Item = f64>,
{
    let mut is_empty = true;
    for (index, value) in values.into_iter().enumerate() {
        is_empty = false;
        if !value.is_finite() {
            return Err(StatsError::NonFinite { index });
        }
    }
    if is_empty {
        return Err(StatsError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_values_accepts_finite() {
        assert_eq!(check_values([1.0, -2.5, 0.0]), Ok(()));
    }

    #[test]
    fn test_check_values_rejects_empty() {
        assert_eq!(check_values(std::iter::empty()), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_check_values_reports_first_non_finite() {
        let values = [1.0, f64::INFINITY, f64::NAN];
        assert_eq!(
            check_values(values),
            Err(StatsError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn test_display_messages() {
        let err = StatsError::DivisionByZero {
            denominator: Denominator::StandardDeviation,
        };
        assert_eq!(
            err.to_string(),
            "division by zero: standard deviation is zero"
        );
        assert_eq!(
            StatsError::Domain { size: 0 }.to_string(),
            "logarithm undefined for data size 0"
        );
        assert_eq!(
            StatsError::Overflow.to_string(),
            "result exceeds the range of f64"
        );
        assert_eq!(
            StatsError::LengthMismatch { xs: 3, ys: 2 }.to_string(),
            "series lengths differ (3 x values, 2 y values)"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&StatsError::EmptyInput);
    }
}
