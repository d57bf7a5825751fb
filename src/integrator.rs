//! The two time-stepping schemes used by the body models.
//!
//! Balls and soft body points use semi-implicit Euler; cloth nodes use
//! Verlet. Both treat `dt <= 0` as "no time passed" and leave the state untouched.

use crate::float::Float;
use crate::vec::Vec2;

/// `v += a*dt; x += v*dt`.
pub fn semi_implicit_euler<F: Float>(
    position: &mut Vec2<F>,
    velocity: &mut Vec2<F>,
    acceleration: Vec2<F>,
    dt: F,
) {
    debug_assert!(!(dt < F::zero()), "timestep must be non-negative");
    if !(dt > F::zero()) {
        return;
    }
    *velocity += acceleration * dt;
    *position += *velocity * dt;
}

/// `x' = x + (x - x_prev) + a*dt²`, with `x_prev` becoming the old `x`.
pub fn verlet<F: Float>(
    position: &mut Vec2<F>,
    previous: &mut Vec2<F>,
    acceleration: Vec2<F>,
    dt: F,
) {
    debug_assert!(!(dt < F::zero()), "timestep must be non-negative");
    if !(dt > F::zero()) {
        return;
    }
    let current = *position;
    *position = current + (current - *previous) + acceleration * (dt * dt);
    *previous = current;
}
