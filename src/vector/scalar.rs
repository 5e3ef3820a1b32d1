// ============================================================================
// Scalar Bound
// Arithmetic a vector component type must support
// ============================================================================

use num_traits::{AsPrimitive, Num};
use std::fmt::{Debug, Display};

/// Component type of a [`FixedVector`](super::FixedVector).
///
/// Requires exactly what the vector operations use: the ring operations and
/// zero/one from [`Num`], ordering against zero, text rendering, and a
/// lossless-enough widening to `f64` for the Euclidean length.
///
/// Blanket-implemented, so every primitive integer and float qualifies while
/// `bool`, `char` and other non-numeric types do not.
pub trait Scalar: Num + Copy + PartialOrd + Debug + Display + AsPrimitive<f64> {
    /// Widen to `f64` (the `as` conversion).
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }
}

impl<T> Scalar for T where T: Num + Copy + PartialOrd + Debug + Display + AsPrimitive<f64> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of_squares<T: Scalar>(values: &[T]) -> f64 {
        values.iter().map(|v| v.to_f64() * v.to_f64()).sum()
    }

    #[test]
    fn test_primitive_scalars() {
        assert_eq!(sum_of_squares(&[3i32, 4]), 25.0);
        assert_eq!(sum_of_squares(&[3u8, 4]), 25.0);
        assert_eq!(sum_of_squares(&[0.5f32, 0.5]), 0.5);
        assert_eq!(sum_of_squares(&[1.5f64, -2.0]), 6.25);
    }

    #[test]
    fn test_zero_and_one() {
        assert_eq!(<i64 as num_traits::Zero>::zero(), 0);
        assert_eq!(<f64 as num_traits::One>::one(), 1.0);
        assert!(num_traits::Zero::is_zero(&0.0f32));
    }

    #[test]
    fn test_to_f64_widening() {
        assert_eq!(7u16.to_f64(), 7.0);
        assert_eq!((-2i8).to_f64(), -2.0);
        assert_eq!(0.25f32.to_f64(), 0.25);
    }
}
