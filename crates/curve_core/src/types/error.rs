//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `DayCountError`: Errors from resolving a day count convention by name
//! - `InterpolationError`: Errors from interpolator construction

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use curve_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Day count convention errors.
///
/// Raised when a convention name is not one of ACT/365, ACT/360 or 30/360
/// (or a recognised alias). The failure is final for the call.
///
/// # Examples
/// ```
/// use curve_core::types::DayCountError;
///
/// let err = DayCountError::InvalidConvention("ACT/ACT".to_string());
/// assert_eq!(format!("{}", err), "Unsupported day count convention: ACT/ACT");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DayCountError {
    /// Convention name outside the supported set.
    #[error("Unsupported day count convention: {0}")]
    InvalidConvention(String),
}

/// Interpolation-related errors.
///
/// # Variants
/// - `InsufficientData`: Not enough knots to build the interpolator
/// - `NonMonotonicData`: Abscissae decrease somewhere
/// - `InvalidInput`: Mismatched or non-finite inputs
///
/// # Examples
/// ```
/// use curve_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 0, need: 1 };
/// assert!(format!("{}", err).contains("got 0"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Abscissae are not non-decreasing.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index of the first knot smaller than its predecessor
        index: usize,
    },

    /// General invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad".to_string());
        assert_eq!(format!("{}", err), "Date parse error: bad");
    }

    #[test]
    fn test_day_count_error_display() {
        let err = DayCountError::InvalidConvention("BUS/252".to_string());
        assert_eq!(
            format!("{}", err),
            "Unsupported day count convention: BUS/252"
        );
    }

    #[test]
    fn test_interpolation_error_display() {
        let err = InterpolationError::NonMonotonicData { index: 3 };
        assert_eq!(format!("{}", err), "Data is not monotonic at index 3");

        let err = InterpolationError::InsufficientData { got: 0, need: 1 };
        assert_eq!(
            format!("{}", err),
            "Insufficient data points: got 0, need at least 1"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let _: &dyn std::error::Error = &DateError::ParseError(String::new());
        let _: &dyn std::error::Error = &DayCountError::InvalidConvention(String::new());
        let _: &dyn std::error::Error = &InterpolationError::InvalidInput(String::new());
    }
}
