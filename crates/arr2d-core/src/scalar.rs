//! Numeric element trait for matrices and the elimination engine.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A signed numeric type with additive and multiplicative identities.
///
/// Elimination assumes a field-like type where `ONE / x` is the
/// multiplicative inverse of `x`. Integer implementations satisfy the
/// trait but truncate on division, so normalizing a pivot other than
/// `±1` zeroes the row; callers using integers accept that.
///
/// Integer arithmetic is not widened or wrapped. Elimination negates row
/// factors and multiplies rows, so a `MIN` entry or an oversized product
/// overflows: a panic in debug builds, wraparound in release builds.
/// Keep integer inputs well inside the type's range.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Magnitude, used for pivot comparison.
    fn abs(self) -> Self;

    /// Whether this value equals [`Scalar::ZERO`].
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// `ONE / self`.
    fn recip(self) -> Self {
        Self::ONE / self
    }
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )*};
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            // MIN has no positive counterpart; saturate so it still ranks
            // as the largest magnitude.
            fn abs(self) -> Self {
                self.saturating_abs()
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i8, i16, i32, i64, i128, isize);
