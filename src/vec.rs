//! Planar vector type shared by every body model.

use crate::float::Float;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 2D vector in screen space (x to the right, y downward).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub const fn new(x: F, y: F) -> Self {
        Vec2 { x, y }
    }

    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    pub fn dot(self, rhs: Self) -> F {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    pub fn scale(self, s: F) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    ///
    /// Every contact normal and link direction in the crate goes through
    /// here, so callers decide what a missing direction means.
    pub fn try_normalize(self) -> Option<Self> {
        let length = self.length();
        if length > F::zero() && length.is_finite() {
            Some(self.scale(F::one() / length))
        } else {
            None
        }
    }

    /// Mirror across the line with unit normal `n`: `v - 2(v·n)n`.
    pub fn reflect(self, n: Self) -> Self {
        self - n.scale(F::two() * self.dot(n))
    }

    pub fn distance(self, to: Self) -> F {
        (to - self).length()
    }

    pub fn distance_sq(self, to: Self) -> F {
        (to - self).length_sq()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    fn mul(self, s: F) -> Self {
        self.scale(s)
    }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
