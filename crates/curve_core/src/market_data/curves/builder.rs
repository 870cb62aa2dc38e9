//! Funding curve builder.

use super::{ComposedRateCurve, InterpolatedRateCurve, RatePoints};
use crate::market_data::discount::DiscountFactorService;
use crate::market_data::error::CurveError;
use crate::types::{Date, DayCountConvention};

/// Builds a [`ComposedRateCurve`] from base rate points and optional
/// credit spread points.
///
/// Both legs are placed on year-fraction axes measured from the same
/// valuation date with the same day count convention, interpolated
/// independently, and summed.
///
/// # Defaults
///
/// - Day count: ACT/365
/// - Spread: none
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use curve_core::market_data::curves::{CurveBuilder, RateCurve};
/// use curve_core::types::{Date, DayCountConvention};
///
/// let valuation = Date::from_ymd(2024, 1, 1).unwrap();
///
/// let mut ois = BTreeMap::new();
/// ois.insert(Date::from_ymd(2025, 1, 1).unwrap(), 0.03);
/// ois.insert(Date::from_ymd(2026, 1, 1).unwrap(), 0.035);
///
/// let mut cs = BTreeMap::new();
/// cs.insert(Date::from_ymd(2025, 1, 1).unwrap(), 0.01);
///
/// let curve = CurveBuilder::new(ois, valuation)
///     .with_day_count(DayCountConvention::Act360)
///     .with_spread(cs)
///     .build()
///     .unwrap();
///
/// let t = 366.0 / 360.0;
/// assert!((curve.rate(t) - 0.04).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveBuilder {
    base: RatePoints,
    spread: Option<RatePoints>,
    valuation_date: Date,
    day_count: DayCountConvention,
}

impl CurveBuilder {
    /// Start a builder from base rate points and a valuation date.
    pub fn new(base: impl Into<RatePoints>, valuation_date: Date) -> Self {
        Self {
            base: base.into(),
            spread: None,
            valuation_date,
            day_count: DayCountConvention::default(),
        }
    }

    /// Set the day count convention used for both legs.
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Layer a credit spread curve on top of the base curve.
    ///
    /// An empty collection is treated as no spread.
    pub fn with_spread(mut self, spread: impl Into<RatePoints>) -> Self {
        self.spread = Some(spread.into());
        self
    }

    /// Valuation date of both year-fraction axes.
    #[inline]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Day count convention of both year-fraction axes.
    #[inline]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Base rate points.
    #[inline]
    pub fn base_points(&self) -> &RatePoints {
        &self.base
    }

    /// Spread points, if a spread was supplied.
    #[inline]
    pub fn spread_points(&self) -> Option<&RatePoints> {
        self.spread.as_ref()
    }

    /// Build the composed curve.
    ///
    /// # Returns
    ///
    /// * `Ok(ComposedRateCurve)` - Base curve plus spread curve when one was supplied
    /// * `Err(CurveError::InsufficientData)` - No base points
    /// * `Err(CurveError::Interpolation)` - Non-finite rates in either leg
    pub fn build(&self) -> Result<ComposedRateCurve, CurveError> {
        if self.base.is_empty() {
            return Err(CurveError::InsufficientData { got: 0, need: 1 });
        }

        let base = InterpolatedRateCurve::new(&self.base, self.valuation_date, self.day_count)?;

        let spread = match &self.spread {
            Some(points) if !points.is_empty() => Some(InterpolatedRateCurve::new(
                points,
                self.valuation_date,
                self.day_count,
            )?),
            _ => None,
        };

        Ok(ComposedRateCurve::new(base, spread))
    }

    /// Build the curve and wrap it in a discount factor service that uses
    /// this builder's valuation date and day count convention.
    pub fn build_service(&self) -> Result<DiscountFactorService<ComposedRateCurve>, CurveError> {
        let curve = self.build()?;
        Ok(DiscountFactorService::new(
            curve,
            self.valuation_date,
            self.day_count,
        ))
    }
}
