//! Position-based distance links for the cloth.

use crate::float::Float;
use crate::particle::ClothNode;

/// Keeps two cloth nodes at the distance they had when the link was made.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceLink<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
}

impl<F: Float> DistanceLink<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceLink { a, b, rest_length }
    }

    /// Capture the current distance between two nodes as the rest length.
    pub fn from_nodes(a: usize, b: usize, nodes: &[ClothNode<F>]) -> Self {
        let rest_length = nodes[a].pos.distance(nodes[b].pos);
        DistanceLink { a, b, rest_length }
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Current length minus rest length; positive when stretched.
    pub fn stretch(&self, nodes: &[ClothNode<F>]) -> F {
        nodes[self.a].pos.distance(nodes[self.b].pos) - self.rest_length
    }

    /// One relaxation step. Each free endpoint takes half the error, so a
    /// link between two free nodes lands exactly on its rest length and one
    /// with a held endpoint closes half the gap.
    ///
    /// Returns `false` when the endpoints coincide and no direction exists.
    pub fn solve(&self, nodes: &mut [ClothNode<F>]) -> bool {
        let delta = nodes[self.b].pos - nodes[self.a].pos;
        let dist = delta.length();
        let Some(direction) = delta.try_normalize() else {
            return false;
        };

        let offset = (dist - self.rest_length) * F::half();
        let adjustment = direction * offset;

        if nodes[self.a].is_free() {
            nodes[self.a].pos += adjustment;
        }
        if nodes[self.b].is_free() {
            nodes[self.b].pos -= adjustment;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    fn pair(bx: f64) -> [ClothNode<f64>; 2] {
        [ClothNode::new(Vec2::new(0.0, 0.0)), ClothNode::new(Vec2::new(bx, 0.0))]
    }

    #[test]
    fn rest_length_captured_at_creation() {
        let nodes = pair(50.0);
        let link = DistanceLink::from_nodes(0, 1, &nodes);
        assert_eq!(link.rest_length(), 50.0);
    }

    #[test]
    fn free_pair_snaps_to_rest() {
        let mut nodes = pair(80.0);
        let link = DistanceLink::new(0, 1, 50.0);
        assert!(link.solve(&mut nodes));
        assert!((nodes[0].pos.x - 15.0).abs() < 1e-12);
        assert!((nodes[1].pos.x - 65.0).abs() < 1e-12);
        assert!(link.stretch(&nodes).abs() < 1e-12);
    }

    #[test]
    fn pinned_end_halves_the_gap() {
        let mut nodes = pair(80.0);
        nodes[0].pin();
        let link = DistanceLink::new(0, 1, 50.0);
        link.solve(&mut nodes);
        assert_eq!(nodes[0].pos, Vec2::new(0.0, 0.0));
        assert!((nodes[1].pos.x - 65.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_nodes_skipped() {
        let mut nodes = pair(0.0);
        let link = DistanceLink::new(0, 1, 50.0);
        assert!(!link.solve(&mut nodes));
        assert_eq!(nodes[1].pos, Vec2::new(0.0, 0.0));
    }
}
