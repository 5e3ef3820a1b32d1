// ============================================================================
// Tolerance Configuration
// Bounds used to compare floating-point vector results
// ============================================================================

use crate::vector::{VectorError, VectorResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute and relative bounds for approximate comparison.
///
/// Two scalars `a` and `b` are considered equal when
/// `|a - b| <= max(absolute, relative * max(|a|, |b|))`.
/// The absolute bound governs values near zero, the relative bound large
/// magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToleranceConfig {
    /// Largest accepted difference regardless of magnitude
    pub absolute: f64,

    /// Largest accepted difference as a fraction of the larger operand
    pub relative: f64,
}

impl ToleranceConfig {
    /// Create a new configuration with both bounds
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Builder method: Set the absolute bound
    pub fn with_absolute(mut self, absolute: f64) -> Self {
        self.absolute = absolute;
        self
    }

    /// Builder method: Set the relative bound
    pub fn with_relative(mut self, relative: f64) -> Self {
        self.relative = relative;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> VectorResult<()> {
        let valid = |bound: f64| bound.is_finite() && bound >= 0.0;
        if valid(self.absolute) && valid(self.relative) {
            Ok(())
        } else {
            tracing::debug!(
                absolute = self.absolute,
                relative = self.relative,
                "rejected tolerance configuration"
            );
            Err(VectorError::InvalidTolerance)
        }
    }

    /// Check whether two scalars are equal within this tolerance.
    #[inline]
    pub fn within(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        let magnitude = a.abs().max(b.abs());
        diff <= self.absolute.max(self.relative * magnitude)
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self::double_precision()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ToleranceConfig {
    /// Bit-for-bit comparison
    pub fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Suited to `f64` results after a handful of operations
    /// - Absolute: 1e-9
    /// - Relative: 1e-9
    pub fn double_precision() -> Self {
        Self::new(1e-9, 1e-9)
    }

    /// Suited to `f32` results after a handful of operations
    /// - Absolute: 1e-5
    /// - Relative: 1e-5
    pub fn single_precision() -> Self {
        Self::new(1e-5, 1e-5)
    }
}
