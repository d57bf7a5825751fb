//! Rigid disks for the bouncing-ball arena.

use crate::float::Float;
use crate::integrator::semi_implicit_euler;
use crate::vec::Vec2;

/// Display color of a ball. Every collision flips it to the other value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tint {
    Red,
    Blue,
}

impl Tint {
    /// The other tint.
    pub fn toggled(self) -> Self {
        match self {
            Tint::Red => Tint::Blue,
            Tint::Blue => Tint::Red,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

/// An equal-mass disk integrated with semi-implicit Euler.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub radius: F,
    pub tint: Tint,
}

impl<F: Float> Ball<F> {
    pub fn new(pos: Vec2<F>, vel: Vec2<F>, radius: F, tint: Tint) -> Self {
        Ball { pos, vel, radius, tint }
    }

    /// Accelerate by `gravity` and move, once per frame.
    pub fn integrate(&mut self, gravity: Vec2<F>, dt: F) {
        semi_implicit_euler(&mut self.pos, &mut self.vel, gravity, dt);
    }

    /// Pin the ball to an externally driven position for this frame.
    pub fn hold_at(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.vel = Vec2::zero();
    }

    /// `½|v|²` for a unit mass.
    pub fn kinetic_energy(&self) -> F {
        F::half() * self.vel.length_sq()
    }
}
