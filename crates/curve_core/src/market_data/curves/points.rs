//! Quoted rate points and date-ordered collections of them.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::market_data::error::CurveError;
use crate::types::{Date, DayCountConvention};

/// A single quoted observation: a rate for a calendar date.
///
/// Rates are decimal fractions (0.0325 for 3.25%).
///
/// # Example
///
/// ```
/// use curve_core::market_data::curves::RatePoint;
/// use curve_core::types::Date;
///
/// let point = RatePoint::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.0325);
/// assert_eq!(point.rate, 0.0325);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatePoint {
    /// Quote date
    pub date: Date,
    /// Rate as a decimal fraction
    pub rate: f64,
}

impl RatePoint {
    /// Construct a rate point.
    #[inline]
    pub fn new(date: Date, rate: f64) -> Self {
        Self { date, rate }
    }
}

/// Rate points held in strictly increasing date order.
///
/// Ordering is established once at construction, so every consumer sees a
/// sorted sequence and the interpolation axis built from it is monotonic.
///
/// # Construction
///
/// - [`RatePoints::new`]: from any sequence; sorts it and rejects repeated dates
/// - `From<BTreeMap<Date, f64>>` / `From<HashMap<Date, f64>>`: keys are already unique
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use curve_core::market_data::curves::RatePoints;
/// use curve_core::types::Date;
///
/// let mut quotes = HashMap::new();
/// quotes.insert(Date::from_ymd(2026, 1, 1).unwrap(), 0.035);
/// quotes.insert(Date::from_ymd(2025, 1, 1).unwrap(), 0.03);
///
/// let points = RatePoints::from(quotes);
/// let dates: Vec<String> = points.dates().map(|d| d.to_string()).collect();
/// assert_eq!(dates, ["2025-01-01", "2026-01-01"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatePoints {
    points: Vec<RatePoint>,
}

impl RatePoints {
    /// Sort `points` by date.
    ///
    /// # Errors
    /// `CurveError::DuplicateDate` if two points share a date. An empty
    /// input is accepted; emptiness is checked where a curve is built.
    pub fn new(points: impl IntoIterator<Item = RatePoint>) -> Result<Self, CurveError> {
        let mut points: Vec<RatePoint> = points.into_iter().collect();
        points.sort_by_key(|p| p.date);

        if let Some(pair) = points.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(CurveError::DuplicateDate { date: pair[0].date });
        }

        Ok(Self { points })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in ascending date order.
    #[inline]
    pub fn as_slice(&self) -> &[RatePoint] {
        &self.points
    }

    /// Iterate over points in ascending date order.
    pub fn iter(&self) -> std::slice::Iter<'_, RatePoint> {
        self.points.iter()
    }

    /// Dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// Rates in date order.
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }

    /// Year fraction of every point measured from `valuation_date`.
    ///
    /// Non-decreasing because the points are date-sorted and every supported
    /// convention is monotonic in the end date.
    pub fn year_fractions(&self, valuation_date: Date, day_count: DayCountConvention) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| day_count.year_fraction(valuation_date, p.date))
            .collect()
    }
}

impl<S: BuildHasher> From<HashMap<Date, f64, S>> for RatePoints {
    fn from(map: HashMap<Date, f64, S>) -> Self {
        let mut points: Vec<RatePoint> = map
            .into_iter()
            .map(|(date, rate)| RatePoint::new(date, rate))
            .collect();
        points.sort_by_key(|p| p.date);
        Self { points }
    }
}

impl From<BTreeMap<Date, f64>> for RatePoints {
    fn from(map: BTreeMap<Date, f64>) -> Self {
        Self {
            points: map
                .into_iter()
                .map(|(date, rate)| RatePoint::new(date, rate))
                .collect(),
        }
    }
}

impl TryFrom<Vec<RatePoint>> for RatePoints {
    type Error = CurveError;

    fn try_from(points: Vec<RatePoint>) -> Result<Self, Self::Error> {
        RatePoints::new(points)
    }
}

impl<'a> IntoIterator for &'a RatePoints {
    type Item = &'a RatePoint;
    type IntoIter = std::slice::Iter<'a, RatePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
