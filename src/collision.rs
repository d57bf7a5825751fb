//! Contact resolution: circular container walls, disk-disk pairs and a floor line.

use crate::ball::Ball;
use crate::float::Float;
use crate::observer::{Degeneracy, StepObserver};
use crate::point::MassPoint;
use crate::vec::Vec2;

/// Result of testing one body or pair for contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Not touching; nothing changed.
    Separate,
    /// Overlap found and corrected.
    Resolved,
    /// Overlap found but no contact normal exists; nothing changed.
    Degenerate,
}

/// A circle the balls are kept inside.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container<F: Float> {
    pub center: Vec2<F>,
    pub radius: F,
}

impl<F: Float> Container<F> {
    pub fn new(center: Vec2<F>, radius: F) -> Self {
        Container { center, radius }
    }

    /// Push a ball back inside and reflect its velocity about the wall normal.
    pub fn resolve(&self, ball: &mut Ball<F>) -> Contact {
        let to_ball = ball.pos - self.center;
        let dist = to_ball.length();
        if !(dist + ball.radius > self.radius) {
            return Contact::Separate;
        }
        let Some(normal) = to_ball.try_normalize() else {
            return Contact::Degenerate;
        };
        ball.pos = self.center + normal * (self.radius - ball.radius);
        ball.vel = ball.vel.reflect(normal);
        ball.tint.toggle();
        Contact::Resolved
    }

    /// Move a ball that pokes through the wall back onto it, leaving its
    /// velocity and tint alone. Returns whether the ball moved.
    pub fn clamp(&self, ball: &mut Ball<F>) -> bool {
        let to_ball = ball.pos - self.center;
        if !(to_ball.length() + ball.radius > self.radius) {
            return false;
        }
        match to_ball.try_normalize() {
            Some(normal) => {
                ball.pos = self.center + normal * (self.radius - ball.radius);
                true
            }
            None => false,
        }
    }

    /// Run [`Container::resolve`] over every ball in order.
    pub fn resolve_all<O: StepObserver>(&self, balls: &mut [Ball<F>], observer: &mut O) {
        for (i, ball) in balls.iter_mut().enumerate() {
            match self.resolve(ball) {
                Contact::Resolved => observer.on_boundary_contact(i),
                Contact::Degenerate => observer.on_degenerate(Degeneracy::BoundaryCenter { body: i }),
                Contact::Separate => {}
            }
        }
    }
}

/// Equal-mass elastic collision between `balls[a]` and `balls[b]`.
///
/// Overlap is split evenly along the line of centers, then `(v_a - v_b)·n`
/// is removed from `a` and added to `b` along `n`. Coincident centers are
/// reported as degenerate and left alone.
pub fn resolve_pair<F: Float>(balls: &mut [Ball<F>], a: usize, b: usize) -> Contact {
    let delta = balls[b].pos - balls[a].pos;
    let dist = delta.length();
    let contact_dist = balls[a].radius + balls[b].radius;
    if !(dist < contact_dist) {
        return Contact::Separate;
    }
    let Some(normal) = delta.try_normalize() else {
        return Contact::Degenerate;
    };

    let half_overlap = (contact_dist - dist) * F::half();
    balls[a].pos -= normal * half_overlap;
    balls[b].pos += normal * half_overlap;

    let impulse = (balls[a].vel - balls[b].vel).dot(normal);
    balls[a].vel -= normal * impulse;
    balls[b].vel += normal * impulse;

    balls[a].tint.toggle();
    balls[b].tint.toggle();
    Contact::Resolved
}

/// Brute-force pass over every pair `i < j`, in index order.
pub fn resolve_pairs<F: Float, O: StepObserver>(balls: &mut [Ball<F>], observer: &mut O) {
    let n = balls.len();
    for i in 0..n {
        for j in (i + 1)..n {
            match resolve_pair(balls, i, j) {
                Contact::Resolved => observer.on_pair_collision(i, j),
                Contact::Degenerate => observer.on_degenerate(Degeneracy::CoincidentPair { a: i, b: j }),
                Contact::Separate => {}
            }
        }
    }
}

/// Horizontal ground line (y grows downward) with an inelastic bounce.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor<F: Float> {
    pub y: F,
    /// Fraction of vertical speed kept after a bounce.
    pub restitution: F,
    /// Factor applied to horizontal speed on a bounce.
    pub friction: F,
}

impl<F: Float> Floor<F> {
    pub fn new(y: F, restitution: F, friction: F) -> Self {
        Floor { y, restitution, friction }
    }

    /// Clamp a point below the floor back onto it. Velocity only changes when
    /// the point is still moving into the floor.
    pub fn resolve(&self, point: &mut MassPoint<F>) -> Contact {
        if !(point.pos.y > self.y) {
            return Contact::Separate;
        }
        point.pos.y = self.y;
        if point.vel.y > F::zero() {
            point.vel.y = -point.vel.y * self.restitution;
            point.vel.x = point.vel.x * self.friction;
        }
        Contact::Resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::Tint;

    fn ball(x: f64, y: f64, vx: f64, vy: f64) -> Ball<f64> {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 15.0, Tint::Red)
    }

    #[test]
    fn wall_contact_clamps_reflects_and_toggles() {
        let c = Container::new(Vec2::new(0.0, 0.0), 100.0);
        let mut b = ball(90.0, 0.0, 10.0, 3.0);
        assert_eq!(c.resolve(&mut b), Contact::Resolved);
        assert!((b.pos.x - 85.0).abs() < 1e-12);
        assert_eq!(b.vel, Vec2::new(-10.0, 3.0));
        assert_eq!(b.tint, Tint::Blue);
    }

    #[test]
    fn clamp_moves_without_reflecting() {
        let c = Container::new(Vec2::new(0.0, 0.0), 100.0);
        let mut b = ball(0.0, -95.0, 0.0, -4.0);
        assert!(c.clamp(&mut b));
        assert!((b.pos.y + 85.0).abs() < 1e-12);
        assert_eq!(b.vel, Vec2::new(0.0, -4.0));
        assert_eq!(b.tint, Tint::Red);
    }

    #[test]
    fn inside_ball_untouched() {
        let c = Container::new(Vec2::new(0.0, 0.0), 100.0);
        let mut b = ball(10.0, 10.0, 1.0, 1.0);
        let before = b.clone();
        assert_eq!(c.resolve(&mut b), Contact::Separate);
        assert_eq!(b, before);
    }

    #[test]
    fn ball_on_center_of_tiny_container_is_degenerate() {
        let c = Container::new(Vec2::new(0.0, 0.0), 10.0);
        let mut b = ball(0.0, 0.0, 1.0, 1.0);
        let before = b.clone();
        assert_eq!(c.resolve(&mut b), Contact::Degenerate);
        assert_eq!(b, before);
    }

    #[test]
    fn head_on_pair_exchanges_velocity() {
        let mut balls = [ball(0.0, 0.0, 4.0, 0.0), ball(20.0, 0.0, -2.0, 0.0)];
        assert_eq!(resolve_pair(&mut balls, 0, 1), Contact::Resolved);
        assert!((balls[0].pos.x + 5.0).abs() < 1e-12);
        assert!((balls[1].pos.x - 25.0).abs() < 1e-12);
        assert_eq!(balls[0].vel, Vec2::new(-2.0, 0.0));
        assert_eq!(balls[1].vel, Vec2::new(4.0, 0.0));
        assert_eq!(balls[0].tint, Tint::Blue);
        assert_eq!(balls[1].tint, Tint::Blue);
    }

    #[test]
    fn touching_pair_is_separate() {
        let mut balls = [ball(0.0, 0.0, 1.0, 0.0), ball(30.0, 0.0, -1.0, 0.0)];
        assert_eq!(resolve_pair(&mut balls, 0, 1), Contact::Separate);
    }

    #[test]
    fn floor_bounce_is_inelastic() {
        let floor = Floor::new(850.0, 0.4, 0.9);
        let mut p = MassPoint::new(Vec2::new(0.0f64, 860.0), 1.0);
        p.vel = Vec2::new(10.0, 50.0);
        assert_eq!(floor.resolve(&mut p), Contact::Resolved);
        assert_eq!(p.pos.y, 850.0);
        assert!((p.vel.y + 20.0).abs() < 1e-12);
        assert!((p.vel.x - 9.0).abs() < 1e-12);
    }

    #[test]
    fn floor_leaves_rising_point_velocity() {
        let floor = Floor::new(850.0, 0.4, 0.9);
        let mut p = MassPoint::new(Vec2::new(0.0f64, 851.0), 1.0);
        p.vel = Vec2::new(10.0, -5.0);
        floor.resolve(&mut p);
        assert_eq!(p.pos.y, 850.0);
        assert_eq!(p.vel, Vec2::new(10.0, -5.0));
    }
}
