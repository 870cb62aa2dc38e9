//! # curve_core: Funding Curve Construction and Discount Factors
//!
//! ## Foundation Layer Role
//!
//! curve_core turns a handful of quoted (date, rate) points into a continuous
//! rate curve and exposes discount factors for arbitrary dates:
//! - Time types: `Date`, `DayCountConvention`, `year_fraction` (`types::time`)
//! - Error types: `DateError`, `DayCountError`, `InterpolationError` (`types::error`)
//! - Piecewise linear interpolation with linear extrapolation (`math::interpolators`)
//! - Rate points, curve building and curve composition (`market_data::curves`)
//! - Date-based discount factor lookup (`market_data::discount`)
//!
//! ## Minimal Dependencies
//!
//! - num-traits: Generic floating-point interpolation
//! - chrono: Date arithmetic
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional, `serde` feature)
//!
//! The crate performs no I/O and no logging. Every failure is returned to the
//! immediate caller.
//!
//! ## Usage Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use curve_core::market_data::curves::{CurveBuilder, RateCurve};
//! use curve_core::types::{Date, DayCountConvention};
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//!
//! let mut ois = BTreeMap::new();
//! ois.insert(Date::from_ymd(2025, 1, 1).unwrap(), 0.03);
//! ois.insert(Date::from_ymd(2026, 1, 1).unwrap(), 0.035);
//!
//! let service = CurveBuilder::new(ois, valuation)
//!     .with_day_count(DayCountConvention::Act365)
//!     .build_service()
//!     .unwrap();
//!
//! let df = service.discount_factor(valuation);
//! assert_eq!(df, 1.0);
//!
//! let curve = service.curve();
//! assert!(curve.rate(1.5) > 0.03);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, DayCountConvention, RatePoint

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
