//! Date-based discount factor service.

use super::curves::{ComposedRateCurve, RateCurve};
use super::error::CurveError;
use crate::types::{Date, DayCountConvention};

/// Discount factors for calendar dates from a rate curve.
///
/// Holds a curve together with its own valuation date and day count
/// convention. These are not checked against the ones the curve was built
/// with, so a curve can be deliberately reused under different settings.
///
/// ```text
/// t  = year_fraction(valuation_date, target_date)
/// r  = curve.rate(t)
/// DF = exp(-r * t)
/// ```
///
/// Target dates before the valuation date give `t < 0` and, for positive
/// rates, a discount factor above 1.
///
/// The curve parameter accepts anything implementing [`RateCurve`],
/// including `&C` and `Arc<C>`, so several services can share one curve.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use std::sync::Arc;
/// use curve_core::market_data::curves::CurveBuilder;
/// use curve_core::market_data::DiscountFactorService;
/// use curve_core::types::{Date, DayCountConvention};
///
/// let valuation = Date::from_ymd(2024, 1, 1).unwrap();
/// let mut ois = BTreeMap::new();
/// ois.insert(Date::from_ymd(2025, 1, 1).unwrap(), 0.03);
///
/// let curve = Arc::new(CurveBuilder::new(ois, valuation).build().unwrap());
/// let act365 = DiscountFactorService::new(Arc::clone(&curve), valuation, DayCountConvention::Act365);
/// let act360 = DiscountFactorService::new(curve, valuation, DayCountConvention::Act360);
///
/// let target = Date::from_ymd(2025, 1, 1).unwrap();
/// assert!(act360.discount_factor(target) < act365.discount_factor(target));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountFactorService<C = ComposedRateCurve> {
    curve: C,
    valuation_date: Date,
    day_count: DayCountConvention,
}

impl<C: RateCurve> DiscountFactorService<C> {
    /// Create a service over `curve`.
    pub fn new(curve: C, valuation_date: Date, day_count: DayCountConvention) -> Self {
        Self {
            curve,
            valuation_date,
            day_count,
        }
    }

    /// Signed year fraction from the valuation date to `target`.
    #[inline]
    pub fn year_fraction(&self, target: Date) -> f64 {
        self.day_count.year_fraction(self.valuation_date, target)
    }

    /// Curve rate for `target`.
    #[inline]
    pub fn rate(&self, target: Date) -> f64 {
        self.curve.rate(self.year_fraction(target))
    }

    /// Discount factor for `target`, `exp(-r * t)`.
    #[inline]
    pub fn discount_factor(&self, target: Date) -> f64 {
        self.curve.discount_factor(self.year_fraction(target))
    }

    /// Discount factors for several dates, in input order.
    pub fn discount_factors(&self, targets: &[Date]) -> Vec<f64> {
        targets.iter().map(|&d| self.discount_factor(d)).collect()
    }

    /// Continuously compounded forward rate between two dates.
    ///
    /// # Errors
    /// `CurveError::InvalidInterval` unless `end` lies strictly after `start`
    /// on this service's year-fraction axis.
    pub fn forward_rate(&self, start: Date, end: Date) -> Result<f64, CurveError> {
        self.curve
            .forward_rate(self.year_fraction(start), self.year_fraction(end))
    }

    /// The underlying curve.
    #[inline]
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Valuation date of this service.
    #[inline]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Day count convention of this service.
    #[inline]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::curves::CurveBuilder;
    use approx::assert_relative_eq;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::thread;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    struct Flat(f64);

    impl RateCurve for Flat {
        fn rate(&self, _t: f64) -> f64 {
            self.0
        }
    }

    fn ois_service() -> DiscountFactorService {
        let mut ois = BTreeMap::new();
        ois.insert(date(2025, 1, 1), 0.03);
        ois.insert(date(2026, 1, 1), 0.035);
        CurveBuilder::new(ois, date(2024, 1, 1))
            .build_service()
            .unwrap()
    }

    #[test]
    fn test_discount_factor_at_valuation_date_is_one() {
        let service = ois_service();
        assert_eq!(service.discount_factor(date(2024, 1, 1)), 1.0);
    }

    #[test]
    fn test_flat_curve_matches_closed_form() {
        let valuation = date(2024, 3, 15);
        let service = DiscountFactorService::new(Flat(0.045), valuation, DayCountConvention::Act360);

        for target in [date(2024, 9, 15), date(2027, 3, 15), date(2034, 12, 31)] {
            let t = DayCountConvention::Act360.year_fraction(valuation, target);
            assert_relative_eq!(
                service.discount_factor(target),
                (-0.045 * t).exp(),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_past_target_discounts_backward() {
        let service = ois_service();
        let target = date(2023, 1, 1);
        let t = service.year_fraction(target);

        assert!(t < 0.0);
        assert!(service.discount_factor(target) > 1.0);
        assert_relative_eq!(
            service.discount_factor(target),
            (-service.rate(target) * t).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_discount_factors_batch_preserves_order() {
        let service = ois_service();
        let targets = [date(2026, 1, 1), date(2024, 6, 1), date(2025, 1, 1)];
        let dfs = service.discount_factors(&targets);

        assert_eq!(dfs.len(), 3);
        for (df, &target) in dfs.iter().zip(&targets) {
            assert_eq!(*df, service.discount_factor(target));
        }
    }

    #[test]
    fn test_forward_rate_between_dates() {
        let service = DiscountFactorService::new(Flat(0.02), date(2024, 1, 1), DayCountConvention::Act365);
        let fwd = service.forward_rate(date(2025, 1, 1), date(2026, 1, 1)).unwrap();
        assert_relative_eq!(fwd, 0.02, epsilon = 1e-12);

        assert!(matches!(
            service.forward_rate(date(2026, 1, 1), date(2025, 1, 1)),
            Err(CurveError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_service_settings_are_independent_of_builder() {
        let shared = ois_service();
        let reused = DiscountFactorService::new(
            shared.curve(),
            date(2024, 1, 1),
            DayCountConvention::Act360,
        );

        let target = date(2025, 1, 1);
        assert_relative_eq!(reused.year_fraction(target), 366.0 / 360.0, epsilon = 1e-12);
        assert_ne!(reused.discount_factor(target), shared.discount_factor(target));
    }

    #[test]
    fn test_concurrent_readers_share_one_curve() {
        let curve = Arc::new(ois_service().curve().clone());
        let expected = ois_service().discount_factor(date(2025, 7, 1));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let curve = Arc::clone(&curve);
                thread::spawn(move || {
                    DiscountFactorService::new(curve, date(2024, 1, 1), DayCountConvention::Act365)
                        .discount_factor(date(2025, 7, 1))
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
