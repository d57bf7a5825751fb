//! Force-driven mass points for the spring-mass soft body.

use crate::float::Float;
use crate::integrator::semi_implicit_euler;
use crate::vec::Vec2;

/// A point mass with an explicit velocity and a per-frame force accumulator.
#[derive(Clone, Debug, PartialEq)]
pub struct MassPoint<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    force: Vec2<F>,
    mass: F,
    pub grabbed: bool,
}

impl<F: Float> MassPoint<F> {
    /// `mass` is validated by the scene config; it must be positive.
    pub fn new(pos: Vec2<F>, mass: F) -> Self {
        debug_assert!(mass.is_positive(), "mass must be positive");
        MassPoint { pos, vel: Vec2::zero(), force: Vec2::zero(), mass, grabbed: false }
    }

    pub fn mass(&self) -> F {
        self.mass
    }

    /// Forces accumulated since the last integration.
    pub fn force(&self) -> Vec2<F> {
        self.force
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.force += force;
    }

    /// Integrate `force / mass` and clear the accumulator.
    ///
    /// A grabbed point keeps its pointer-driven position and only drops its
    /// forces. `dt == 0` leaves everything, accumulator included, as is.
    pub fn integrate(&mut self, dt: F) {
        if !(dt > F::zero()) {
            return;
        }
        if !self.grabbed {
            let accel = self.force.scale(F::one() / self.mass);
            semi_implicit_euler(&mut self.pos, &mut self.vel, accel, dt);
        }
        self.force = Vec2::zero();
    }

    pub fn hold_at(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.vel = Vec2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_resets_after_integrate() {
        let mut p = MassPoint::new(Vec2::new(0.0f32, 0.0), 2.0);
        p.apply_force(Vec2::new(4.0, 0.0));
        p.apply_force(Vec2::new(0.0, 2.0));
        p.integrate(0.5);
        assert_eq!(p.force(), Vec2::zero());
        assert_eq!(p.vel, Vec2::new(1.0, 0.5));
        assert_eq!(p.pos, Vec2::new(0.5, 0.25));
    }

    #[test]
    fn grabbed_point_stays_put() {
        let mut p = MassPoint::new(Vec2::new(1.0f64, 1.0), 1.0);
        p.grabbed = true;
        p.apply_force(Vec2::new(0.0, 100.0));
        p.integrate(0.1);
        assert_eq!(p.pos, Vec2::new(1.0, 1.0));
        assert_eq!(p.force(), Vec2::zero());
    }
}
