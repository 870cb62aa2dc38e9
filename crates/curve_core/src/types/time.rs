//! Time types and day count conventions for curve construction.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: ACT/365, ACT/360 and 30/360
//! - `year_fraction`: Name-keyed year fraction lookup
//!
//! Year fractions are signed: an end date before the start date yields a
//! negative fraction, which represents a date in the past.
//!
//! # Examples
//!
//! ```
//! use curve_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! // Calculate year fraction using ACT/365
//! let yf = DayCountConvention::Act365.year_fraction(start, end);
//! assert!((yf - 0.4986).abs() < 0.001);
//! ```

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::{DateError, DayCountError};

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing and formatting plus the small amount of date
/// arithmetic needed for year fractions.
///
/// # Examples
///
/// ```
/// use curve_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{s:?}: {e}")))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds whole calendar months, clamping to the last day of the month.
    ///
    /// Returns `None` if the result falls outside the representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 1, 31).unwrap();
    /// let next = date.checked_add_months(1).unwrap();
    /// assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn checked_add_months(self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Date)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the signed number of calendar days from `other` to `self`.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `Act365`: Actual days / 365 (default)
/// - `Act360`: Actual days / 360
/// - `Thirty360`: 30/360 bond basis
///
/// # Usage
///
/// ```
/// use curve_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 7, 1).unwrap();
///
/// let yf_360 = DayCountConvention::Act360.year_fraction(start, end);
/// assert!((yf_360 - 0.5056).abs() < 0.001);
///
/// let yf_30 = DayCountConvention::Thirty360.year_fraction(start, end);
/// assert_eq!(yf_30, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    Act365,

    /// Actual/360: actual_days / 360.0
    Act360,

    /// 30/360 bond basis.
    ///
    /// With `d1`, `d2` the start and end day-of-month:
    ///
    /// ```text
    /// D1 = min(d1, 30)
    /// D2 = d2            if d1 < 30
    ///      min(d2, 30)   otherwise
    /// yf = (360 (y2 - y1) + 30 (m2 - m1) + (D2 - D1)) / 360
    /// ```
    ///
    /// The clamp depends on the start date, so this convention is not
    /// exactly antisymmetric in its arguments.
    Thirty360,
}

impl DayCountConvention {
    /// All supported conventions.
    pub const ALL: [DayCountConvention; 3] = [
        DayCountConvention::Act365,
        DayCountConvention::Act360,
        DayCountConvention::Thirty360,
    ];

    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Act365.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::Act360.name(), "ACT/360");
    /// assert_eq!(DayCountConvention::Thirty360.name(), "30/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365 => "ACT/365",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Calculates the signed year fraction between two dates.
    ///
    /// Negative when `end` is before `start`; no clamping is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2024, 1, 1).unwrap();
    /// let end = Date::from_ymd(2024, 7, 1).unwrap();
    ///
    /// let yf = DayCountConvention::Act365.year_fraction(start, end);
    /// let yf_neg = DayCountConvention::Act365.year_fraction(end, start);
    /// assert_eq!(yf, -yf_neg);
    /// ```
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act365 => (end - start) as f64 / 365.0,
            DayCountConvention::Act360 => (end - start) as f64 / 360.0,
            DayCountConvention::Thirty360 => thirty_360(start, end),
        }
    }
}

fn thirty_360(start: Date, end: Date) -> f64 {
    let (y1, m1, d1) = (start.year(), start.month() as i32, start.day() as i32);
    let (y2, m2, d2) = (end.year(), end.month() as i32, end.day() as i32);

    let d1_adj = d1.min(30);
    let d2_adj = if d1 < 30 { d2 } else { d2.min(30) };

    let days = 360 * (y2 - y1) + 30 * (m2 - m1) + (d2_adj - d1_adj);
    days as f64 / 360.0
}

/// Calculates the year fraction between two dates for a named convention.
///
/// Accepts every name understood by `DayCountConvention::from_str`.
///
/// # Errors
/// `DayCountError::InvalidConvention` if the name is not supported.
///
/// # Examples
///
/// ```
/// use curve_core::types::time::{year_fraction, Date};
///
/// let start = Date::from_ymd(2023, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 1).unwrap();
///
/// assert_eq!(year_fraction(start, end, "ACT/365").unwrap(), 1.0);
/// assert!(year_fraction(start, end, "ACT/ACT").is_err());
/// ```
pub fn year_fraction(start: Date, end: Date, convention: &str) -> Result<f64, DayCountError> {
    let convention = DayCountConvention::from_str(convention)?;
    Ok(convention.year_fraction(start, end))
}

impl FromStr for DayCountConvention {
    type Err = DayCountError;

    /// Parses day count convention from string (case-insensitive).
    ///
    /// Supports multiple aliases for each convention:
    /// - ACT/365: "ACT/365", "Actual/365", "Act365", "A365"
    /// - ACT/360: "ACT/360", "Actual/360", "Act360", "A360"
    /// - 30/360: "30/360", "Thirty360", "30360"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" => Ok(DayCountConvention::Act365),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Act360),
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(DayCountError::InvalidConvention(s.to_string())),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}
