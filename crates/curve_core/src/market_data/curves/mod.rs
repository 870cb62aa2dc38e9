//! Curve abstractions for funding rate construction.
//!
//! This module provides:
//! - [`RatePoint`], [`RatePoints`]: Quoted observations, held in date order
//! - [`RateCurve`]: Trait for rate, discount factor and forward rate queries
//! - [`InterpolatedRateCurve`]: One linearly interpolated leg on a year-fraction axis
//! - [`ComposedRateCurve`]: Base leg plus optional additive spread leg
//! - [`CurveBuilder`]: Builds a composed curve from base and spread points

mod builder;
mod composed;
mod interpolated;
mod points;
mod traits;

pub use builder::CurveBuilder;
pub use composed::ComposedRateCurve;
pub use interpolated::InterpolatedRateCurve;
pub use points::{RatePoint, RatePoints};
pub use traits::RateCurve;
