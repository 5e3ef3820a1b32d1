// ============================================================================
// Fixed-Dimension Vector
// Numeric vector whose dimension is part of its type
// ============================================================================

use super::errors::{VectorError, VectorResult};
use super::scalar::Scalar;
use crate::config::ToleranceConfig;
use arrayvec::ArrayVec;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Fractional digits used by `Display` when the formatter sets no precision.
///
/// Non-finite components render as `NaN`, `inf` and `-inf` regardless of
/// precision.
pub const DEFAULT_PRECISION: usize = 6;

/// Immutable vector of exactly `N` components of type `T`.
///
/// The dimension is a const generic, so combining vectors of different
/// dimensions, constructing one from an array of the wrong length, or taking
/// the cross product of a non-3-D vector are all compile errors. Run-time
/// input (slices, `Vec`s, iterators) goes through the fallible constructors,
/// which return [`VectorError::InvalidArity`] instead of truncating or padding.
///
/// Every operation returns a new vector; there are no mutating methods.
///
/// The operators follow the semantics of the component type: integer overflow
/// panics in debug builds and wraps in release builds, exactly like the
/// primitive operators. Integer code that can overflow uses the `checked_*`
/// methods, which return [`VectorError::Overflow`] instead.
///
/// # Example
/// ```
/// use fixed_vector::{vector, Vector3d};
///
/// let a: Vector3d = vector![1.0, 0.0, 0.0];
/// let b: Vector3d = vector![0.0, 1.0, 0.0];
///
/// assert_eq!(a.cross(&b), vector![0.0, 0.0, 1.0]);
/// assert_eq!(a * b, 0.0);                      // dot product
/// assert_eq!((a + b) * 2.0, vector![2.0, 2.0, 0.0]); // scale
/// assert_eq!(a.to_string(), "[ 1.000000, 0.000000, 0.000000 ]");
/// ```
///
/// A 3-D vector cannot be built from two components:
/// ```compile_fail
/// use fixed_vector::{vector, Vector3d};
///
/// let v: Vector3d = vector![1.0, 2.0];
/// ```
///
/// ... nor from four:
/// ```compile_fail
/// use fixed_vector::Vector3d;
///
/// let v = Vector3d::new([1.0, 2.0, 3.0, 4.0]);
/// ```
///
/// The cross product only exists in three dimensions:
/// ```compile_fail
/// use fixed_vector::Vector2d;
///
/// let v = Vector2d::new([1.0, 2.0]);
/// let _ = v.cross(&v);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FixedVector<T, const N: usize>([T; N]);

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Angle in radians
pub type Angle = f64;

/// Double precision 2-D vector
pub type Vector2d = FixedVector<f64, 2>;

/// Double precision 3-D vector (positions, velocities)
pub type Vector3d = FixedVector<f64, 3>;

/// Single precision 3-D vector
pub type Vector3f = FixedVector<f32, 3>;

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    /// The number of components
    pub const DIM: usize = N;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from exactly `N` components, in order.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    /// The vector with every component zero.
    #[inline]
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }

    /// Create from a slice whose length is only known at run time.
    ///
    /// # Errors
    /// Returns `InvalidArity` unless `components.len() == N`.
    pub fn from_slice(components: &[T]) -> VectorResult<Self> {
        <[T; N]>::try_from(components)
            .map(Self)
            .map_err(|_| Self::arity_error(components.len()))
    }

    /// Create from an iterator that must yield exactly `N` components.
    ///
    /// The iterator is drained even when it is too long, so the error reports
    /// the full count.
    ///
    /// # Errors
    /// Returns `InvalidArity` if the iterator yields fewer or more than `N` items.
    pub fn try_from_iter<I>(components: I) -> VectorResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = components.into_iter();
        let mut buffer = ArrayVec::<T, N>::new();

        let mut overflowed = false;
        for component in iter.by_ref() {
            if buffer.try_push(component).is_err() {
                overflowed = true;
                break;
            }
        }
        if overflowed {
            return Err(Self::arity_error(N + 1 + iter.count()));
        }

        buffer
            .into_inner()
            .map(Self)
            .map_err(|partial| Self::arity_error(partial.len()))
    }

    fn arity_error(actual: usize) -> VectorError {
        tracing::debug!(expected = N, actual, "rejected vector construction: arity mismatch");
        VectorError::InvalidArity {
            expected: N,
            actual,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of components (always `N`).
    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    /// Component at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.0.get(index).copied()
    }

    /// Borrow the components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Borrow the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consume the vector, returning its components.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Iterate over the components in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Dot product, accumulated left to right starting from zero.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Multiply every component by `s`.
    #[inline]
    pub fn scale(self, s: T) -> Self {
        Self(self.0.map(|component| s * component))
    }

    /// Dot product of the vector with itself.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    ///
    /// Computed in `f64` so integer vectors neither truncate nor overflow the
    /// intermediate sum of squares.
    #[inline]
    pub fn length(&self) -> f64 {
        self.0
            .iter()
            .map(|component| {
                let c = component.to_f64();
                c * c
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let d = a.to_f64() - b.to_f64();
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Unsigned angle between two vectors in radians, in `[0, π]`.
    ///
    /// Returns `None` if either vector has zero length.
    pub fn angle_between(&self, other: &Self) -> Option<Angle> {
        let denominator = self.length() * other.length();
        if denominator == 0.0 {
            return None;
        }

        let dot: f64 = self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.to_f64() * b.to_f64())
            .sum();

        // Rounding can push the cosine marginally outside [-1, 1]
        Some((dot / denominator).clamp(-1.0, 1.0).acos())
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: &ToleranceConfig) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| tolerance.within(a.to_f64(), b.to_f64()))
    }

    /// Cross product for code that is generic over the dimension.
    ///
    /// Prefer [`FixedVector::cross`] when the dimension is known to be 3; it
    /// cannot fail.
    ///
    /// # Errors
    /// Returns `UnsupportedOperation` unless `N == 3`.
    pub fn try_cross(&self, other: &Self) -> VectorResult<Self> {
        if N != 3 {
            tracing::debug!(dimension = N, "rejected cross product: dimension is not 3");
            return Err(VectorError::UnsupportedOperation {
                operation: "cross product",
                dimension: N,
            });
        }
        Self::from_slice(&cross_components(&self.0, &other.0))
    }
}

// ============================================================================
// Checked Integer Arithmetic
// ============================================================================

impl<T, const N: usize> FixedVector<T, N>
where
    T: Scalar + CheckedAdd + CheckedSub + CheckedMul,
{
    /// Checked component-wise addition.
    ///
    /// # Errors
    /// Returns `Overflow` if any component sum is out of range.
    pub fn checked_add(&self, other: &Self) -> VectorResult<Self> {
        self.checked_zip(other, "addition", |a, b| CheckedAdd::checked_add(a, b))
    }

    /// Checked component-wise subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if any component difference is out of range.
    pub fn checked_sub(&self, other: &Self) -> VectorResult<Self> {
        self.checked_zip(other, "subtraction", |a, b| CheckedSub::checked_sub(a, b))
    }

    /// Checked scalar multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if any scaled component is out of range.
    pub fn checked_scale(&self, s: T) -> VectorResult<Self> {
        let mut result = self.0;
        for component in result.iter_mut() {
            *component = CheckedMul::checked_mul(&s, component)
                .ok_or_else(|| Self::overflow_error("scalar multiplication"))?;
        }
        Ok(Self(result))
    }

    /// Checked dot product, accumulated left to right starting from zero.
    ///
    /// # Errors
    /// Returns `Overflow` if a product or a partial sum is out of range.
    pub fn checked_dot(&self, other: &Self) -> VectorResult<T> {
        self.0
            .iter()
            .zip(other.0.iter())
            .try_fold(T::zero(), |acc, (a, b)| {
                CheckedMul::checked_mul(a, b).and_then(|product| CheckedAdd::checked_add(&acc, &product))
            })
            .ok_or_else(|| Self::overflow_error("dot product"))
    }

    fn checked_zip<F>(&self, other: &Self, operation: &'static str, op: F) -> VectorResult<Self>
    where
        F: Fn(&T, &T) -> Option<T>,
    {
        let mut result = self.0;
        for (component, (a, b)) in result.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *component = op(a, b).ok_or_else(|| Self::overflow_error(operation))?;
        }
        Ok(Self(result))
    }

    fn overflow_error(operation: &'static str) -> VectorError {
        tracing::debug!(operation, dimension = N, "rejected integer vector arithmetic: overflow");
        VectorError::Overflow { operation }
    }
}

/// Standard 3-D cross product on the first three components of each slice.
#[inline]
fn cross_components<T: Scalar>(a: &[T], b: &[T]) -> [T; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

// ============================================================================
// Dimension-Specific Operations
// ============================================================================

impl<T: Scalar> FixedVector<T, 3> {
    /// Cross product.
    ///
    /// The result is perpendicular to both operands, has length
    /// `|a| |b| sin θ`, and `a.cross(&b) == -b.cross(&a)`.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self(cross_components(&self.0, &other.0))
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }
}

impl<T: Scalar> FixedVector<T, 2> {
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Scalar, const N: usize> Default for FixedVector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T: Scalar, const N: usize> Add for FixedVector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<T: Scalar, const N: usize> Sub for FixedVector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

/// `vector * scalar` scales the vector.
impl<T: Scalar, const N: usize> Mul<T> for FixedVector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// `vector * vector` is the dot product.
impl<T: Scalar, const N: usize> Mul for FixedVector<T, N> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(&rhs)
    }
}

impl<T, const N: usize> Neg for FixedVector<T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.map(|component| -component))
    }
}

impl<T: Scalar, const N: usize> Sum for FixedVector<T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

// `scalar * vector` for the primitive scalars (a blanket impl over `T` would
// violate the orphan rule).
macro_rules! impl_scalar_times_vector {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl<const N: usize> Mul<FixedVector<$scalar, N>> for $scalar {
                type Output = FixedVector<$scalar, N>;

                #[inline]
                fn mul(self, rhs: FixedVector<$scalar, N>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_times_vector!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// ============================================================================
// Conversions
// ============================================================================

impl<T: Scalar, const N: usize> From<[T; N]> for FixedVector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T: Scalar, const N: usize> From<FixedVector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: FixedVector<T, N>) -> Self {
        vector.0
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for FixedVector<T, N> {
    type Error = VectorError;

    fn try_from(components: &[T]) -> VectorResult<Self> {
        Self::from_slice(components)
    }
}

impl<T: Scalar, const N: usize> TryFrom<Vec<T>> for FixedVector<T, N> {
    type Error = VectorError;

    fn try_from(components: Vec<T>) -> VectorResult<Self> {
        Self::from_slice(&components)
    }
}

impl<T: Scalar, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedVector<{}>{:?}", N, self.0)
    }
}

/// Renders `[ c0, c1, ..., cN-1 ]`.
///
/// Floating-point components get [`DEFAULT_PRECISION`] fractional digits
/// unless the formatter carries its own precision (`{:.2}`). Integer
/// components ignore precision and render plainly.
impl<T: Scalar, const N: usize> fmt::Display for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);

        f.write_str("[ ")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:.*}", precision, component)?;
        }
        f.write_str(" ]")
    }
}

// ============================================================================
// Tests
// ============================================================================
