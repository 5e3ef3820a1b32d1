// ============================================================================
// Fixed Vector Library
// Fixed-dimension numeric vectors with compile-time arity
// ============================================================================

//! # Fixed Vector
//!
//! Small, immutable numeric vectors whose dimension is part of the type.
//!
//! ## Features
//!
//! - **Compile-time arity**: `FixedVector<T, N>` always holds exactly `N` components
//! - **Operators**: `+`, `-`, `vector * scalar` (scale), `vector * vector` (dot)
//! - **3-D only cross product**, rejected by the compiler for other dimensions
//! - **Euclidean length**, distance and angle
//! - **Text rendering** as `[ c0, c1, ... ]`
//! - **Tolerance-based comparison** for floating-point results
//!
//! ## Example
//!
//! ```rust
//! use fixed_vector::prelude::*;
//!
//! let position = Vector3d::new([1.0, 2.0, 3.0]);
//! let velocity = Vector3d::new([0.5, 0.0, -1.0]);
//!
//! let next = position + velocity * 2.0;
//! assert_eq!(next, Vector3d::new([2.0, 2.0, 1.0]));
//!
//! let normal = Vector3d::new([1.0, 0.0, 0.0]).cross(&Vector3d::new([0.0, 1.0, 0.0]));
//! assert_eq!(normal.to_string(), "[ 0.000000, 0.000000, 1.000000 ]");
//!
//! assert_eq!(Vector3d::new([3.0, 4.0, 0.0]).length(), 5.0);
//! ```

pub mod config;
#[cfg(feature = "logging")]
pub mod logging;
pub mod vector;

pub use config::ToleranceConfig;
pub use vector::{
    Angle, FixedVector, Scalar, Vector2d, Vector3d, Vector3f, VectorError, VectorResult,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::ToleranceConfig;
    pub use crate::vector;
    pub use crate::vector::{
        Angle, FixedVector, Scalar, Vector2d, Vector3d, Vector3f, VectorError, VectorResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_projectile_step() {
        let gravity = Vector3d::new([0.0, 0.0, -9.81]);
        let mut position = Vector3d::new([0.0, 0.0, 10.0]);
        let mut velocity = Vector3d::new([2.0, 0.0, 0.0]);
        let dt = 0.5;

        for _ in 0..2 {
            velocity = velocity + gravity * dt;
            position = position + velocity * dt;
        }

        let expected = Vector3d::new([2.0, 0.0, 10.0 - 9.81 * 0.25 - 9.81 * 0.5]);
        assert!(position.approx_eq(&expected, &ToleranceConfig::default()));
    }

    #[test]
    fn test_macro_and_aliases() {
        let a: Vector3d = vector![1.0, 2.0, 3.0];
        let b: Vector3f = vector![1.0, 2.0, 3.0];
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(vector![1, 2], FixedVector::<i32, 2>::new([1, 2]));
    }
}
