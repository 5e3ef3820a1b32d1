// ============================================================================
// Vector Errors
// Error types for run-time checked vector construction and operations
// ============================================================================

use std::fmt;

/// Errors that can occur when a vector contract can only be checked at run time.
///
/// Array and macro construction, and the cross product on 3-D vectors, are
/// checked by the compiler and never produce these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Number of supplied components differs from the vector dimension
    InvalidArity {
        /// The dimension of the target vector type
        expected: usize,
        /// The number of components actually supplied
        actual: usize,
    },
    /// Operation is not defined for vectors of this dimension
    UnsupportedOperation {
        /// Name of the rejected operation
        operation: &'static str,
        /// Dimension of the vector it was invoked on
        dimension: usize,
    },
    /// Checked integer arithmetic left the range of the component type
    Overflow {
        /// Name of the overflowing operation
        operation: &'static str,
    },
    /// Tolerance bounds are negative or not finite
    InvalidTolerance,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidArity { expected, actual } => write!(
                f,
                "invalid arity: expected {} components, got {}",
                expected, actual
            ),
            VectorError::UnsupportedOperation {
                operation,
                dimension,
            } => write!(
                f,
                "unsupported operation: {} is not defined for dimension {}",
                operation, dimension
            ),
            VectorError::Overflow { operation } => {
                write!(f, "arithmetic overflow in {}", operation)
            },
            VectorError::InvalidTolerance => write!(
                f,
                "invalid tolerance: bounds must be finite and non-negative"
            ),
        }
    }
}

impl std::error::Error for VectorError {}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            VectorError::InvalidArity {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "invalid arity: expected 3 components, got 2"
        );
        assert_eq!(
            VectorError::UnsupportedOperation {
                operation: "cross product",
                dimension: 4
            }
            .to_string(),
            "unsupported operation: cross product is not defined for dimension 4"
        );
        assert_eq!(
            VectorError::Overflow {
                operation: "dot product"
            }
            .to_string(),
            "arithmetic overflow in dot product"
        );
    }

    #[test]
    fn test_error_equality() {
        let short = VectorError::InvalidArity {
            expected: 3,
            actual: 2,
        };
        let long = VectorError::InvalidArity {
            expected: 3,
            actual: 4,
        };
        assert_eq!(short, short);
        assert_ne!(short, long);
        assert_ne!(short, VectorError::InvalidTolerance);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(VectorError::InvalidTolerance);
        assert!(err.to_string().starts_with("invalid tolerance"));
    }
}
