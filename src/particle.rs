//! Verlet cloth nodes with implicit velocity.

use crate::float::Float;
use crate::integrator::verlet;
use crate::vec::Vec2;

/// A cloth node: position plus the position it had one frame ago.
///
/// Pinned nodes never move. Grabbed nodes are driven by the pointer and skip
/// integration and constraint corrections while held.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothNode<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub pinned: bool,
    pub grabbed: bool,
}

impl<F: Float> ClothNode<F> {
    pub fn new(pos: Vec2<F>) -> Self {
        ClothNode { pos, prev_pos: pos, pinned: false, grabbed: false }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        ClothNode { pos, prev_pos: pos, pinned: true, grabbed: false }
    }

    /// Neither pinned nor grabbed.
    pub fn is_free(&self) -> bool {
        !self.pinned && !self.grabbed
    }

    pub fn integrate(&mut self, gravity: Vec2<F>, dt: F) {
        if !self.is_free() {
            return;
        }
        verlet(&mut self.pos, &mut self.prev_pos, gravity, dt);
    }

    /// Displacement over the last frame.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
        self.prev_pos = self.pos;
    }

    /// Drive a grabbed node. The last move becomes its velocity on release.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        self.prev_pos = self.pos;
        self.pos = pos;
    }
}
