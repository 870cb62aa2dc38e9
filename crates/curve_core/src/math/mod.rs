//! Mathematical primitives for curve construction.
//!
//! - [`interpolators`]: Piecewise linear interpolation with linear extrapolation

pub mod interpolators;
