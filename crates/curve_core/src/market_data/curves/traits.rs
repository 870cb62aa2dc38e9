//! Rate curve trait definition.

use std::sync::Arc;

use crate::market_data::error::CurveError;

/// A continuously compounded rate curve indexed by year fraction.
///
/// Implementors only supply [`rate`](RateCurve::rate); discount factors and
/// forward rates follow from it.
///
/// # Contract
///
/// - `rate(t)` is defined for every real `t`, including `t < 0`
/// - `discount_factor(t) = exp(-rate(t) * t)`, so `discount_factor(0) = 1`
/// - No clamping: `t < 0` yields a discount factor above 1 for positive rates
///
/// # Example
///
/// ```
/// use curve_core::market_data::curves::RateCurve;
///
/// struct Flat(f64);
///
/// impl RateCurve for Flat {
///     fn rate(&self, _t: f64) -> f64 {
///         self.0
///     }
/// }
///
/// let curve = Flat(0.05);
/// assert!((curve.discount_factor(1.0) - 0.951229).abs() < 1e-6);
/// assert!((curve.forward_rate(1.0, 2.0).unwrap() - 0.05).abs() < 1e-12);
/// ```
pub trait RateCurve {
    /// Return the continuously compounded rate at year fraction `t`.
    fn rate(&self, t: f64) -> f64;

    /// Return the discount factor for year fraction `t`.
    ///
    /// ```text
    /// D(t) = exp(-r(t) * t)
    /// ```
    #[inline]
    fn discount_factor(&self, t: f64) -> f64 {
        (-self.rate(t) * t).exp()
    }

    /// Return the zero rate at `t`; identical to [`rate`](RateCurve::rate)
    /// since the curve is quoted in continuously compounded zero rates.
    #[inline]
    fn zero_rate(&self, t: f64) -> f64 {
        self.rate(t)
    }

    /// Return the forward rate between `t1` and `t2`.
    ///
    /// ```text
    /// f(t1, t2) = -ln(D(t2) / D(t1)) / (t2 - t1)
    /// ```
    ///
    /// # Errors
    /// `CurveError::InvalidInterval` if `t2 <= t1`.
    fn forward_rate(&self, t1: f64, t2: f64) -> Result<f64, CurveError> {
        let dt = t2 - t1;
        if dt <= 0.0 {
            return Err(CurveError::InvalidInterval { start: t1, end: t2 });
        }
        let df1 = self.discount_factor(t1);
        let df2 = self.discount_factor(t2);
        Ok(-(df2 / df1).ln() / dt)
    }
}

impl<C: RateCurve + ?Sized> RateCurve for &C {
    #[inline]
    fn rate(&self, t: f64) -> f64 {
        (**self).rate(t)
    }
}

impl<C: RateCurve + ?Sized> RateCurve for Box<C> {
    #[inline]
    fn rate(&self, t: f64) -> f64 {
        (**self).rate(t)
    }
}

impl<C: RateCurve + ?Sized> RateCurve for Arc<C> {
    #[inline]
    fn rate(&self, t: f64) -> f64 {
        (**self).rate(t)
    }
}
