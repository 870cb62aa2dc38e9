//! Core time and error types.
//!
//! This module provides:
//! - `time`: `Date`, `DayCountConvention` and the string-keyed `year_fraction`
//! - `error`: Structured error types for date, day count and interpolation operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`], [`year_fraction`] from `time`
//! - [`DateError`], [`DayCountError`], [`InterpolationError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, DayCountError, InterpolationError};
pub use time::{year_fraction, Date, DayCountConvention};
