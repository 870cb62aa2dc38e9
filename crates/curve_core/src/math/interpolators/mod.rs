//! Interpolation methods for rate curves.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation that extrapolates
//!   the first and last segments beyond the knot range
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> T`: Compute the interpolated value, defined for every real `x`
//! - `domain() -> (T, T)`: Return the knot range
//!
//! ## Example
//!
//! ```
//! use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0_f64, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(interp.domain(), (0.0, 3.0));
//!
//! // Between knots
//! assert!((interp.interpolate(1.5) - 2.5).abs() < 1e-10);
//!
//! // Beyond the last knot the (2, 4) -> (3, 9) segment is extended
//! assert!((interp.interpolate(4.0) - 14.0).abs() < 1e-10);
//! ```

mod linear;
mod traits;

pub use linear::LinearInterpolator;
pub use traits::Interpolator;
