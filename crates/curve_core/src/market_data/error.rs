//! Curve error types.
//!
//! This module provides structured error handling for curve construction
//! and rate queries.

use crate::types::{Date, DayCountError, InterpolationError};
use thiserror::Error;

/// Curve construction and query errors.
///
/// # Variants
///
/// - `InsufficientData`: No base rate points at build time
/// - `DuplicateDate`: Two rate points share a date
/// - `InvalidInterval`: Forward rate requested over an empty or reversed interval
/// - `DayCount`: Wrapped day count error
/// - `Interpolation`: Wrapped interpolation error
///
/// # Examples
///
/// ```
/// use curve_core::market_data::CurveError;
///
/// let err = CurveError::InsufficientData { got: 0, need: 1 };
/// assert_eq!(format!("{}", err), "Insufficient data: got 0 rate points, need at least 1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Insufficient rate points for construction.
    #[error("Insufficient data: got {got} rate points, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// More than one rate point quoted for the same date.
    #[error("Duplicate rate point date: {date}")]
    DuplicateDate {
        /// The repeated date
        date: Date,
    },

    /// Interval end is not after its start.
    #[error("Invalid interval: end {end} must be after start {start}")]
    InvalidInterval {
        /// Interval start (year fraction)
        start: f64,
        /// Interval end (year fraction)
        end: f64,
    },

    /// Day count error.
    #[error(transparent)]
    DayCount(#[from] DayCountError),

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_date_display() {
        let err = CurveError::DuplicateDate {
            date: Date::from_ymd(2025, 1, 1).unwrap(),
        };
        assert_eq!(format!("{}", err), "Duplicate rate point date: 2025-01-01");
    }

    #[test]
    fn test_invalid_interval_display() {
        let err = CurveError::InvalidInterval {
            start: 2.0,
            end: 1.0,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid interval: end 1 must be after start 2"
        );
    }

    #[test]
    fn test_from_day_count_error_is_transparent() {
        let err: CurveError = DayCountError::InvalidConvention("ACT/ACT".to_string()).into();
        assert_eq!(
            format!("{}", err),
            "Unsupported day count convention: ACT/ACT"
        );
    }

    #[test]
    fn test_from_interpolation_error() {
        let err: CurveError = InterpolationError::NonMonotonicData { index: 1 }.into();
        match err {
            CurveError::Interpolation(InterpolationError::NonMonotonicData { index }) => {
                assert_eq!(index, 1)
            }
            other => panic!("Expected Interpolation variant, got {other:?}"),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = CurveError::InsufficientData { got: 0, need: 1 };
        let _: &dyn std::error::Error = &err;
    }
}
