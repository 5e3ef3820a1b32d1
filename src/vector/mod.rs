// ============================================================================
// Vector Module
// Fixed-dimension numeric vectors for geometry and physics
// ============================================================================
//
// This module provides:
// - FixedVector<T, N>: Vector with compile-time dimension
// - Scalar: Bound on the component type
// - VectorError: Error types for run-time checked operations
// - Vector2d/Vector3d/Vector3f type aliases for common use cases
//
// Design principles:
// - Dimension is a const generic; arity and cross-product misuse fail to compile
// - Immutable values, every operation returns a new vector
// - Run-time input returns Result (no truncation, no padding)
// - Operators keep primitive overflow semantics; checked_* methods return Result

mod errors;
mod fixed_vector;
mod scalar;

pub use errors::{VectorError, VectorResult};
pub use fixed_vector::{Angle, FixedVector, Vector2d, Vector3d, Vector3f, DEFAULT_PRECISION};
pub use scalar::Scalar;

/// Build a [`FixedVector`] from its components.
///
/// The dimension is the number of arguments, so a mismatch with the expected
/// vector type is a compile error.
///
/// ```
/// use fixed_vector::{vector, Vector3d};
///
/// let v: Vector3d = vector![3.0, 4.0, 0.0];
/// assert_eq!(v.length(), 5.0);
/// ```
#[macro_export]
macro_rules! vector {
    ($($component:expr),+ $(,)?) => {
        $crate::vector::FixedVector::new([$($component),+])
    };
}
