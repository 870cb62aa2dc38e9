//! Single-leg interpolated rate curve.

use super::{RateCurve, RatePoints};
use crate::market_data::error::CurveError;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use crate::types::{Date, DayCountConvention};

/// Rate curve for one leg (base or spread) built from dated rate points.
///
/// Each point's date is converted to a year fraction from the valuation
/// date; rates are then linearly interpolated on that axis and linearly
/// extrapolated beyond the first and last knot.
///
/// A single point gives a flat curve.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use curve_core::market_data::curves::{InterpolatedRateCurve, RateCurve, RatePoints};
/// use curve_core::types::{Date, DayCountConvention};
///
/// let valuation = Date::from_ymd(2023, 1, 1).unwrap();
/// let mut quotes = BTreeMap::new();
/// quotes.insert(Date::from_ymd(2024, 1, 1).unwrap(), 0.02);
/// quotes.insert(Date::from_ymd(2025, 1, 1).unwrap(), 0.03);
///
/// let curve = InterpolatedRateCurve::new(
///     &RatePoints::from(quotes),
///     valuation,
///     DayCountConvention::Act365,
/// )
/// .unwrap();
///
/// assert_eq!(curve.tenors()[0], 1.0);
/// assert!((curve.rate(1.0) - 0.02).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedRateCurve {
    /// Knot dates in ascending order
    dates: Vec<Date>,
    /// Rates interpolated on the year-fraction axis
    interpolator: LinearInterpolator<f64>,
}

impl InterpolatedRateCurve {
    /// Build a curve leg from rate points.
    ///
    /// # Returns
    ///
    /// * `Ok(InterpolatedRateCurve)` - Successfully constructed curve
    /// * `Err(CurveError::InsufficientData)` - `points` is empty
    /// * `Err(CurveError::Interpolation)` - Non-finite rates
    pub fn new(
        points: &RatePoints,
        valuation_date: Date,
        day_count: DayCountConvention,
    ) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::InsufficientData { got: 0, need: 1 });
        }

        let tenors = points.year_fractions(valuation_date, day_count);
        let interpolator = LinearInterpolator::new(&tenors, &points.rates())?;

        Ok(Self {
            dates: points.dates().collect(),
            interpolator,
        })
    }

    /// Knot dates in ascending order.
    #[inline]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Year-fraction axis, one entry per knot.
    #[inline]
    pub fn tenors(&self) -> &[f64] {
        self.interpolator.xs()
    }

    /// Knot rates.
    #[inline]
    pub fn rates(&self) -> &[f64] {
        self.interpolator.ys()
    }

    /// Year-fraction range spanned by the knots.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        self.interpolator.domain()
    }

    /// True for a single-point curve, which is constant for every `t`.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.interpolator.is_flat()
    }
}

impl RateCurve for InterpolatedRateCurve {
    #[inline]
    fn rate(&self, t: f64) -> f64 {
        self.interpolator.interpolate(t)
    }
}
