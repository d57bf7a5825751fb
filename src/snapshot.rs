//! Read-only view of a scene handed to whatever draws it.

use crate::ball::Tint;
use crate::collision::{Container, Floor};
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// How a renderer should style a body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Appearance {
    /// A ball's current color.
    Tint(Tint),
    /// Fixed in place.
    Pinned,
    /// Held by the pointer.
    Grabbed,
    Plain,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyView<F: Float> {
    pub position: Vec2<F>,
    pub radius: F,
    pub appearance: Appearance,
}

/// Endpoints of one link or spring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkView<F: Float> {
    pub a: Vec2<F>,
    pub b: Vec2<F>,
}

/// Static geometry bodies collide with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Boundary<F: Float> {
    Circle(Container<F>),
    Floor(Floor<F>),
    Open,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<F: Float> {
    pub bodies: AllocVec<BodyView<F>>,
    pub links: AllocVec<LinkView<F>>,
    pub boundary: Boundary<F>,
}

impl<F: Float> Snapshot<F> {
    /// Axis-aligned bounds of all body centers, `None` when empty.
    pub fn extent(&self) -> Option<(Vec2<F>, Vec2<F>)> {
        let first = self.bodies.first()?.position;
        let mut min = first;
        let mut max = first;
        for body in &self.bodies[1..] {
            min = Vec2::new(min.x.min(body.position.x), min.y.min(body.position.y));
            max = Vec2::new(max.x.max(body.position.x), max.y.max(body.position.y));
        }
        Some((min, max))
    }
}
