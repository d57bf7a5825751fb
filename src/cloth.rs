//! Verlet cloth: a grid of nodes held together by distance links.

use crate::config::ClothConfig;
use crate::constraint::DistanceLink;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::input::{Grab, PointerEvent};
use crate::observer::{Degeneracy, StepObserver};
use crate::particle::ClothNode;
use crate::snapshot::{Appearance, BodyView, Boundary, LinkView, Snapshot};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A cloth mesh built from a grid of Verlet nodes.
pub struct ClothScene<F: Float> {
    config: ClothConfig<F>,
    nodes: AllocVec<ClothNode<F>>,
    links: AllocVec<DistanceLink<F>>,
    grab: Grab<F>,
}

impl<F: Float> ClothScene<F> {
    /// Build the grid described by `config`.
    ///
    /// Node at (col, row) has index `row * cols + col`. Walking the nodes in
    /// that order, each node links to its right neighbor, the node below,
    /// and (when both exist) the lower-right diagonal, followed by the
    /// anti-diagonal between the right and lower neighbors.
    pub fn new(config: ClothConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        let (nodes, links) = build(&config);
        let grab = Grab::new(config.grab_threshold_sq);
        Ok(ClothScene { config, nodes, links, grab })
    }

    pub fn handle_pointer(&mut self, event: PointerEvent<F>) {
        self.grab.handle(event);
    }

    /// One frame: drive the grabbed node, integrate, then relax every link
    /// `iterations` times in construction order.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if !(dt > F::zero()) {
            return;
        }

        let update = self.grab.begin_frame(self.nodes.iter().map(|n| n.pos));
        if let Some(index) = update.released() {
            self.nodes[index].grabbed = false;
        }
        if let Some((index, target)) = update.hold() {
            let node = &mut self.nodes[index];
            node.grabbed = true;
            node.move_to(target);
        }

        for node in self.nodes.iter_mut() {
            node.integrate(self.config.gravity, dt);
        }
        observer.on_integrate();

        for i in 0..self.config.iterations {
            for link in self.links.iter() {
                if !link.solve(&mut self.nodes) {
                    observer.on_degenerate(Degeneracy::ZeroLength { a: link.a, b: link.b });
                }
            }
            observer.on_constraint_iteration(i);
        }

        observer.on_step_complete();
    }

    /// Rebuild the cloth from its configuration.
    pub fn reset(&mut self) {
        let (nodes, links) = build(&self.config);
        self.nodes = nodes;
        self.links = links;
        self.grab.clear();
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.config.cols + col
    }

    pub fn pin(&mut self, col: usize, row: usize) {
        let idx = self.index(col, row);
        self.nodes[idx].pin();
    }

    pub fn unpin(&mut self, col: usize, row: usize) {
        let idx = self.index(col, row);
        self.nodes[idx].unpin();
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.nodes.iter().map(|n| n.pos).collect()
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.nodes[self.index(col, row)].pos
    }

    pub fn snapshot(&self) -> Snapshot<F> {
        let radius = self.config.node_radius;
        let bodies = self
            .nodes
            .iter()
            .map(|n| BodyView {
                position: n.pos,
                radius,
                appearance: if n.grabbed {
                    Appearance::Grabbed
                } else if n.pinned {
                    Appearance::Pinned
                } else {
                    Appearance::Plain
                },
            })
            .collect();
        let links = self
            .links
            .iter()
            .map(|l| LinkView { a: self.nodes[l.a].pos, b: self.nodes[l.b].pos })
            .collect();
        Snapshot { bodies, links, boundary: Boundary::Open }
    }

    pub fn node(&self, index: usize) -> &ClothNode<F> { &self.nodes[index] }
    pub fn node_mut(&mut self, index: usize) -> &mut ClothNode<F> { &mut self.nodes[index] }
    pub fn nodes(&self) -> &[ClothNode<F>] { &self.nodes }
    pub fn links(&self) -> &[DistanceLink<F>] { &self.links }
    pub fn cols(&self) -> usize { self.config.cols }
    pub fn rows(&self) -> usize { self.config.rows }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn body_count(&self) -> usize { self.nodes.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
}

fn build<F: Float>(config: &ClothConfig<F>) -> (AllocVec<ClothNode<F>>, AllocVec<DistanceLink<F>>) {
    let (cols, rows) = (config.cols, config.rows);
    let origin = config.resolved_origin();

    let mut nodes = AllocVec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let pos = origin + Vec2::new(F::from_usize(col), F::from_usize(row)) * config.spacing;
            if config.pins.is_pinned(col, row, cols, rows) {
                nodes.push(ClothNode::pinned(pos));
            } else {
                nodes.push(ClothNode::new(pos));
            }
        }
    }

    let idx = |col: usize, row: usize| row * cols + col;
    let mut links = AllocVec::with_capacity(2 * cols * rows + 2 * (cols - 1) * (rows - 1));
    for row in 0..rows {
        for col in 0..cols {
            let here = idx(col, row);
            let has_right = col + 1 < cols;
            let has_below = row + 1 < rows;
            if has_right {
                links.push(DistanceLink::from_nodes(here, idx(col + 1, row), &nodes));
            }
            if has_below {
                links.push(DistanceLink::from_nodes(here, idx(col, row + 1), &nodes));
            }
            if has_right && has_below {
                links.push(DistanceLink::from_nodes(here, idx(col + 1, row + 1), &nodes));
                links.push(DistanceLink::from_nodes(idx(col + 1, row), idx(col, row + 1), &nodes));
            }
        }
    }

    (nodes, links)
}
