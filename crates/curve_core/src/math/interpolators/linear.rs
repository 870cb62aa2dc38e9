//! Linear interpolation implementation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator with linear extrapolation.
///
/// Stores knots whose abscissae are non-decreasing and connects consecutive
/// knots with straight lines. Queries before the first knot or after the
/// last one extend the first or last segment.
///
/// # Degenerate inputs
///
/// - A single knot produces a constant function.
/// - Two knots sharing an abscissa form a zero-width segment; queries at
///   that abscissa return the right-hand knot value.
/// - Extrapolation uses the nearest segment of non-zero width, anchored at
///   the outermost knot. If every knot shares one abscissa the function is
///   constant at the last knot value.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[1.0_f64, 2.0], &[0.03, 0.035]).unwrap();
///
/// assert!((interp.interpolate(1.5) - 0.0325).abs() < 1e-12);
/// assert!((interp.interpolate(0.0) - 0.025).abs() < 1e-12);
///
/// let flat = LinearInterpolator::new(&[1.0_f64], &[0.04]).unwrap();
/// assert_eq!(flat.interpolate(-3.0), 0.04);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator<T: Float> {
    /// Non-decreasing x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// The abscissae must already be sorted; callers that hold unordered
    /// data are expected to sort it first.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or non-finite values
    /// * `Err(InterpolationError::InsufficientData)` - No data points
    /// * `Err(InterpolationError::NonMonotonicData)` - An abscissa smaller than its predecessor
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }

        if let Some(index) = xs.iter().chain(ys).position(|v| !v.is_finite()) {
            return Err(InterpolationError::InvalidInput(format!(
                "non-finite value at position {}",
                index % xs.len()
            )));
        }

        if let Some(index) = (1..xs.len()).find(|&i| xs[i] < xs[i - 1]) {
            return Err(InterpolationError::NonMonotonicData { index });
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Returns a reference to the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// True when there is a single knot and the function is constant.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.xs.len() < 2
    }

    /// Index of the first segment with non-zero width.
    #[inline]
    fn first_sloped_segment(&self) -> Option<usize> {
        self.xs.windows(2).position(|w| w[1] > w[0])
    }

    /// Index of the last segment with non-zero width.
    #[inline]
    fn last_sloped_segment(&self) -> Option<usize> {
        self.xs.windows(2).rposition(|w| w[1] > w[0])
    }

    /// Slope of segment `i`, which must have non-zero width.
    #[inline]
    fn slope(&self, i: usize) -> T {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }

    /// Evaluate the line through segment `i` at `x`.
    #[inline]
    fn on_segment(&self, i: usize, x: T) -> T {
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        y0 + (y1 - y0) * ((x - x0) / (x1 - x0))
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Evaluate the piecewise linear function at `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    fn interpolate(&self, x: T) -> T {
        let n = self.xs.len();
        let last = self.ys[n - 1];

        // xs[pos - 1] <= x < xs[pos]
        let pos = self.xs.partition_point(|&xi| xi <= x);

        if pos == 0 {
            return self
                .first_sloped_segment()
                .map_or(last, |i| self.on_segment(i, x));
        }

        if pos == n {
            let x_last = self.xs[n - 1];
            return self
                .last_sloped_segment()
                .map_or(last, |i| last + self.slope(i) * (x - x_last));
        }

        // Interior segments found this way always have non-zero width
        self.on_segment(pos - 1, x)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_with_single_point() {
        let interp = LinearInterpolator::new(&[1.0], &[0.02]).unwrap();
        assert_eq!(interp.len(), 1);
        assert!(interp.is_flat());
        assert!(!interp.is_empty());
    }

    #[test]
    fn test_new_insufficient_data_zero_points() {
        let xs: [f64; 0] = [];
        let ys: [f64; 0] = [];
        match LinearInterpolator::new(&xs, &ys).unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 0);
                assert_eq!(need, 1);
            }
            other => panic!("Expected InsufficientData error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_mismatched_lengths() {
        let result = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_decreasing_abscissae() {
        let result = LinearInterpolator::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::NonMonotonicData { index: 2 }
        );
    }

    #[test]
    fn test_new_rejects_non_finite_values() {
        let result = LinearInterpolator::new(&[0.0, 1.0], &[0.0, f64::NAN]);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_new_accepts_repeated_abscissa() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 3.0, 4.0]);
        assert!(interp.is_ok());
    }

    // ========================================
    // Evaluation
    // ========================================

    #[test]
    fn test_interpolate_at_knots() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
        for (&x, &y) in interp.xs().iter().zip(interp.ys()) {
            assert_relative_eq!(interp.interpolate(x), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_interpolate_between_knots() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 3.0], &[1.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(interp.interpolate(0.5), 2.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(2.0), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolate_left_uses_first_segment() {
        let interp = LinearInterpolator::new(&[1.0, 2.0, 4.0], &[0.03, 0.035, 0.05]).unwrap();
        // slope 0.005 per unit on the first segment
        assert_relative_eq!(interp.interpolate(0.0), 0.025, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(-1.0), 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolate_right_uses_last_segment() {
        let interp = LinearInterpolator::new(&[1.0, 2.0, 4.0], &[0.03, 0.035, 0.05]).unwrap();
        // slope 0.0075 per unit on the last segment
        assert_relative_eq!(interp.interpolate(6.0), 0.065, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point_is_constant_everywhere() {
        let interp = LinearInterpolator::new(&[2.0], &[0.04]).unwrap();
        for x in [-10.0, 0.0, 2.0, 100.0] {
            assert_eq!(interp.interpolate(x), 0.04);
        }
    }

    #[test]
    fn test_zero_width_segment_returns_right_knot() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 3.0, 4.0]).unwrap();
        assert_eq!(interp.interpolate(1.0), 3.0);
        assert_relative_eq!(interp.interpolate(0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolate_left_past_leading_zero_width_segment() {
        let interp = LinearInterpolator::new(&[1.0, 1.0, 2.0], &[0.02, 0.025, 0.035]).unwrap();
        // Line through (1, 0.025) and (2, 0.035)
        assert_eq!(interp.interpolate(1.0), 0.025);
        assert_relative_eq!(interp.interpolate(0.0), 0.015, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(-1.0), 0.005, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolate_right_past_trailing_zero_width_segment() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 3.0]).unwrap();
        // Slope 1 from the (0, 0) -> (1, 1) segment, anchored at (1, 3)
        assert_eq!(interp.interpolate(1.0), 3.0);
        assert_relative_eq!(interp.interpolate(2.0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(5.0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_all_knots_on_one_abscissa_is_constant() {
        let interp = LinearInterpolator::new(&[1.0, 1.0], &[0.02, 0.025]).unwrap();
        for x in [-2.0, 1.0, 4.0] {
            assert_eq!(interp.interpolate(x), 0.025);
        }
    }

    #[test]
    fn test_domain() {
        let interp = LinearInterpolator::new(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0]).unwrap();
        assert_eq!(interp.domain(), (1.0, 3.0));
    }

    #[test]
    fn test_generic_over_f32() {
        let interp = LinearInterpolator::new(&[0.0_f32, 2.0], &[0.0_f32, 1.0]).unwrap();
        assert!((interp.interpolate(1.0_f32) - 0.5).abs() < 1e-6);
    }
}
