//! Interpolator trait definition.

use num_traits::Float;

/// One-dimensional interpolator over knots `(x_i, y_i)`.
///
/// Implementations are generic over `T: Float` and must be total: every
/// real query point produces a value, with behaviour outside
/// [`domain`](Interpolator::domain) defined by the implementation's
/// extrapolation rule.
pub trait Interpolator<T: Float> {
    /// Return the interpolated (or extrapolated) value at `x`.
    fn interpolate(&self, x: T) -> T;

    /// Return the knot range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
