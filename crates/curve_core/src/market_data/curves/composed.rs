//! Base curve plus optional additive spread curve.

use super::{InterpolatedRateCurve, RateCurve};

/// Total funding rate: a base curve with an optional credit spread on top.
///
/// ```text
/// total_rate(t) = base(t) + spread(t)    if a spread curve is present
///               = base(t)                otherwise
/// ```
///
/// Immutable once constructed; `Clone`, `Send` and `Sync`, so a single
/// instance can be read from many threads or wrapped in an `Arc`.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use curve_core::market_data::curves::{ComposedRateCurve, InterpolatedRateCurve, RatePoints};
/// use curve_core::types::{Date, DayCountConvention};
///
/// let valuation = Date::from_ymd(2023, 1, 1).unwrap();
/// let leg = |rate: f64| {
///     let mut quotes = BTreeMap::new();
///     quotes.insert(Date::from_ymd(2024, 1, 1).unwrap(), rate);
///     InterpolatedRateCurve::new(&RatePoints::from(quotes), valuation, DayCountConvention::Act365)
///         .unwrap()
/// };
///
/// let curve = ComposedRateCurve::new(leg(0.03), Some(leg(0.01)));
/// assert!((curve.evaluate(1.0) - 0.04).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedRateCurve {
    base: InterpolatedRateCurve,
    spread: Option<InterpolatedRateCurve>,
}

impl ComposedRateCurve {
    /// Compose a base curve with an optional spread curve.
    pub fn new(base: InterpolatedRateCurve, spread: Option<InterpolatedRateCurve>) -> Self {
        Self { base, spread }
    }

    /// Total rate at year fraction `t`.
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.base_rate(t) + self.spread_rate(t)
    }

    /// Base curve rate at `t`.
    #[inline]
    pub fn base_rate(&self, t: f64) -> f64 {
        self.base.rate(t)
    }

    /// Spread at `t`; zero when no spread curve is present.
    #[inline]
    pub fn spread_rate(&self, t: f64) -> f64 {
        self.spread.as_ref().map_or(0.0, |spread| spread.rate(t))
    }

    /// The base curve.
    #[inline]
    pub fn base(&self) -> &InterpolatedRateCurve {
        &self.base
    }

    /// The spread curve, if any.
    #[inline]
    pub fn spread(&self) -> Option<&InterpolatedRateCurve> {
        self.spread.as_ref()
    }

    /// True if a spread curve is layered on the base.
    #[inline]
    pub fn has_spread(&self) -> bool {
        self.spread.is_some()
    }
}

impl RateCurve for ComposedRateCurve {
    #[inline]
    fn rate(&self, t: f64) -> f64 {
        self.evaluate(t)
    }
}
