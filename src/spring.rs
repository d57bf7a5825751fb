//! Damped Hooke springs between mass points.

use crate::float::Float;
use crate::point::MassPoint;
use crate::vec::Vec2;

/// A damped spring. All coefficients are fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F, damping: F) -> Self {
        Spring { a, b, rest_length, stiffness, damping }
    }

    /// Unit direction `a → b` and the signed force along it; `None` when the
    /// endpoints coincide.
    pub fn force_along(&self, points: &[MassPoint<F>]) -> Option<(Vec2<F>, F)> {
        let delta = points[self.b].pos - points[self.a].pos;
        let length = delta.length();
        let direction = delta.try_normalize()?;
        let closing_speed = (points[self.b].vel - points[self.a].vel).dot(direction);
        let magnitude = self.stiffness * (length - self.rest_length) + self.damping * closing_speed;
        Some((direction, magnitude))
    }

    /// Add the spring force to `a` and its negation to `b`.
    ///
    /// Returns `false` and applies nothing for a zero-length spring.
    pub fn apply(&self, points: &mut [MassPoint<F>]) -> bool {
        let Some((direction, magnitude)) = self.force_along(points) else {
            return false;
        };
        let force = direction * magnitude;
        points[self.a].apply_force(force);
        points[self.b].apply_force(-force);
        true
    }
}
