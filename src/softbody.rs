//! 2D spring-mass soft body bouncing on a floor.

use crate::collision::Contact;
use crate::config::{SoftBodyConfig, MAX_SOFT_POINTS, MIN_SOFT_POINTS};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::input::{Grab, PointerEvent};
use crate::observer::{Degeneracy, StepObserver};
use crate::point::MassPoint;
use crate::snapshot::{Appearance, BodyView, Boundary, LinkView, Snapshot};
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A wheel of mass points: one hub at the center, `point_count` on the rim,
/// spokes from the hub to every rim point and rim springs between neighbors.
pub struct SoftBodyScene<F: Float> {
    config: SoftBodyConfig<F>,
    points: AllocVec<MassPoint<F>>,
    springs: AllocVec<Spring<F>>,
    grab: Grab<F>,
}

impl<F: Float> SoftBodyScene<F> {
    /// Point 0 is the hub; rim point `i` (1-based) sits at angle
    /// `(i - 1) * 2π / n`. Springs are stored spokes first, then rim.
    pub fn new(config: SoftBodyConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        let (points, springs) = build(&config);
        let grab = Grab::new(config.grab_threshold_sq);
        Ok(SoftBodyScene { config, points, springs, grab })
    }

    pub fn handle_pointer(&mut self, event: PointerEvent<F>) {
        self.grab.handle(event);
    }

    /// One frame: grab, spring forces, gravity, integrate, floor.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if !(dt > F::zero()) {
            return;
        }

        let update = self.grab.begin_frame(self.points.iter().map(|p| p.pos));
        if let Some(index) = update.released() {
            self.points[index].grabbed = false;
        }
        if let Some((index, target)) = update.hold() {
            let point = &mut self.points[index];
            point.grabbed = true;
            point.hold_at(target);
        }

        for spring in self.springs.iter() {
            if !spring.apply(&mut self.points) {
                observer.on_degenerate(Degeneracy::ZeroLength { a: spring.a, b: spring.b });
            }
        }

        let gravity = self.config.gravity;
        let scale = self.config.gravity_scale;
        for point in self.points.iter_mut() {
            let weight = gravity * (point.mass() * scale);
            point.apply_force(weight);
            point.integrate(dt);
        }
        observer.on_integrate();

        for (i, point) in self.points.iter_mut().enumerate() {
            if self.config.floor.resolve(point) == Contact::Resolved {
                observer.on_floor_contact(i);
            }
        }

        observer.on_step_complete();
    }

    /// Rebuild the body from its configuration.
    pub fn reset(&mut self) {
        let (points, springs) = build(&self.config);
        self.points = points;
        self.springs = springs;
        self.grab.clear();
    }

    /// Change the rim point count and rebuild. Out-of-range counts are
    /// rejected and the current body is kept.
    pub fn set_point_count(&mut self, count: usize) -> Result<(), PhysicsError> {
        if !(MIN_SOFT_POINTS..=MAX_SOFT_POINTS).contains(&count) {
            return Err(PhysicsError::PointCountOutOfRange {
                count,
                min: MIN_SOFT_POINTS,
                max: MAX_SOFT_POINTS,
            });
        }
        self.config.point_count = count;
        self.reset();
        Ok(())
    }

    /// Mean position of all points, hub included.
    pub fn centroid(&self) -> Vec2<F> {
        if self.points.is_empty() {
            return Vec2::zero();
        }
        let n = F::from_usize(self.points.len());
        let sum = self.points.iter().fold(Vec2::zero(), |acc, p| acc + p.pos);
        sum.scale(F::one() / n)
    }

    /// Total momentum `Σ m·v`.
    pub fn momentum(&self) -> Vec2<F> {
        self.points.iter().fold(Vec2::zero(), |acc, p| acc + p.vel * p.mass())
    }

    pub fn snapshot(&self) -> Snapshot<F> {
        let radius = self.config.point_radius;
        let bodies = self
            .points
            .iter()
            .map(|p| BodyView {
                position: p.pos,
                radius,
                appearance: if p.grabbed { Appearance::Grabbed } else { Appearance::Plain },
            })
            .collect();
        let links = self
            .springs
            .iter()
            .map(|s| LinkView { a: self.points[s.a].pos, b: self.points[s.b].pos })
            .collect();
        Snapshot { bodies, links, boundary: Boundary::Floor(self.config.floor) }
    }

    pub fn points(&self) -> &[MassPoint<F>] { &self.points }
    pub fn point(&self, index: usize) -> &MassPoint<F> { &self.points[index] }
    pub fn point_mut(&mut self, index: usize) -> &mut MassPoint<F> { &mut self.points[index] }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn point_count(&self) -> usize { self.config.point_count }
    pub fn config(&self) -> &SoftBodyConfig<F> { &self.config }
    pub fn body_count(&self) -> usize { self.points.len() }
}

fn build<F: Float>(config: &SoftBodyConfig<F>) -> (AllocVec<MassPoint<F>>, AllocVec<Spring<F>>) {
    let n = config.point_count;
    let step = F::two() * F::pi() / F::from_usize(n);

    let mut points = AllocVec::with_capacity(n + 1);
    points.push(MassPoint::new(config.center, config.point_mass));
    for i in 0..n {
        let angle = step * F::from_usize(i);
        let offset = Vec2::new(angle.cos(), angle.sin()) * config.radius;
        points.push(MassPoint::new(config.center + offset, config.point_mass));
    }

    let mut springs = AllocVec::with_capacity(2 * n);
    for i in 1..=n {
        springs.push(Spring::new(0, i, config.radius, config.center_stiffness, config.damping));
    }
    let edge = F::two() * config.radius * (F::pi() / F::from_usize(n)).sin();
    for i in 1..=n {
        let next = 1 + (i % n);
        springs.push(Spring::new(i, next, edge, config.perimeter_stiffness, config.damping));
    }

    (points, springs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;

    #[test]
    fn wheel_layout() {
        let body = SoftBodyScene::new(SoftBodyConfig::<f64>::new().with_point_count(6)).unwrap();
        assert_eq!(body.body_count(), 7);
        assert_eq!(body.springs().len(), 12);
        let rim = body.springs()[6];
        assert_eq!((rim.a, rim.b), (1, 2));
        assert!((rim.rest_length - 100.0).abs() < 1e-9); // hexagon side = radius
        let last = body.springs()[11];
        assert_eq!((last.a, last.b), (6, 1));
    }

    #[test]
    fn starts_at_rest_length() {
        let body = SoftBodyScene::new(SoftBodyConfig::<f64>::new().with_point_count(12)).unwrap();
        for s in body.springs() {
            let len = body.point(s.a).pos.distance(body.point(s.b).pos);
            assert!((len - s.rest_length).abs() < 1e-9);
        }
    }

    #[test]
    fn set_point_count_rebuilds() {
        let mut body = SoftBodyScene::new(SoftBodyConfig::<f32>::new()).unwrap();
        body.set_point_count(20).unwrap();
        assert_eq!(body.body_count(), 21);
        assert!(body.set_point_count(2).is_err());
        assert_eq!(body.point_count(), 20);
    }

    #[test]
    fn accumulators_clear_after_step() {
        let mut body = SoftBodyScene::new(SoftBodyConfig::<f32>::new().with_point_count(8)).unwrap();
        body.step(1.0 / 60.0, &mut NoOpStepObserver);
        for p in body.points() {
            assert_eq!(p.force(), Vec2::zero());
        }
    }
}
