//! Market data structures for funding curve construction.
//!
//! # Components
//!
//! - [`curves`]: Rate points, the curve builder and the composed base + spread curve
//! - [`discount`]: Date-based discount factor service over a built curve
//! - [`error`]: Curve construction and query error types (CurveError)
//!
//! # Example
//!
//! ```
//! use curve_core::market_data::curves::{CurveBuilder, RatePoint, RatePoints};
//! use curve_core::types::Date;
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//! let base = RatePoints::new(vec![
//!     RatePoint::new(Date::from_ymd(2026, 1, 1).unwrap(), 0.035),
//!     RatePoint::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.03),
//! ])
//! .unwrap();
//!
//! let service = CurveBuilder::new(base, valuation).build_service().unwrap();
//! let df = service.discount_factor(Date::from_ymd(2025, 1, 1).unwrap());
//! assert!((df - (-0.03_f64 * 366.0 / 365.0).exp()).abs() < 1e-12);
//! ```

pub mod curves;
pub mod discount;
pub mod error;

// Re-export commonly used types
pub use curves::{
    ComposedRateCurve, CurveBuilder, InterpolatedRateCurve, RateCurve, RatePoint, RatePoints,
};
pub use discount::DiscountFactorService;
pub use error::CurveError;
