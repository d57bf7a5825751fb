//! Scalar abstraction so every body model runs in `f32` or `f64`.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};

/// The arithmetic the integrators and resolvers rely on.
///
/// Transcendentals go through `libm` so the crate stays `no_std`.
pub trait Float:
    Copy
    + PartialOrd
    + Default
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn half() -> Self;
    fn two() -> Self;
    fn pi() -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn abs(self) -> Self;
    /// Smaller of the two; `other` when either is NaN.
    fn min(self, other: Self) -> Self;
    /// Larger of the two; `other` when either is NaN.
    fn max(self, other: Self) -> Self;
    /// Lift a configuration constant.
    fn from_f32(v: f32) -> Self;
    /// Neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// A count (grid column, rim index) as a scalar.
    fn from_usize(n: usize) -> Self {
        Self::from_f32(n as f32)
    }

    /// Finite and strictly greater than zero.
    fn is_positive(self) -> bool {
        self.is_finite() && self > Self::zero()
    }
}

macro_rules! impl_float {
    ($t:ident, $sqrt:path, $sin:path, $cos:path, $fabs:path) => {
        impl Float for $t {
            #[inline]
            fn zero() -> Self { 0.0 }
            #[inline]
            fn one() -> Self { 1.0 }
            #[inline]
            fn half() -> Self { 0.5 }
            #[inline]
            fn two() -> Self { 2.0 }
            #[inline]
            fn pi() -> Self { core::$t::consts::PI }
            #[inline]
            fn sqrt(self) -> Self { $sqrt(self) }
            #[inline]
            fn sin(self) -> Self { $sin(self) }
            #[inline]
            fn cos(self) -> Self { $cos(self) }
            #[inline]
            fn abs(self) -> Self { $fabs(self) }
            #[inline]
            fn min(self, other: Self) -> Self {
                if self < other { self } else { other }
            }
            #[inline]
            fn max(self, other: Self) -> Self {
                if self > other { self } else { other }
            }
            #[inline]
            fn from_f32(v: f32) -> Self { v as $t }
            #[inline]
            fn is_finite(self) -> bool { $t::is_finite(self) }
        }
    };
}

impl_float!(f32, libm::sqrtf, libm::sinf, libm::cosf, libm::fabsf);
impl_float!(f64, libm::sqrt, libm::sin, libm::cos, libm::fabs);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_nan_and_zero() {
        assert!(1.0f32.is_positive());
        assert!(!0.0f32.is_positive());
        assert!(!Float::is_positive(-3.0f64));
        assert!(!Float::is_positive(f64::NAN));
        assert!(!f32::INFINITY.is_positive());
    }

    #[test]
    fn libm_backed_math() {
        assert_eq!(Float::sqrt(16.0f32), 4.0);
        assert!((Float::sin(f64::pi() / 2.0) - 1.0).abs() < 1e-12);
        assert_eq!(Float::abs(-2.5f64), 2.5);
        assert_eq!(<f32 as Float>::from_usize(7), 7.0);
    }
}
