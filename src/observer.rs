//! Step observer trait for monitoring simulation progress.

/// Geometric situation a resolver skipped because no direction exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Degeneracy {
    /// A ball sits exactly on the container center.
    BoundaryCenter { body: usize },
    /// Two balls share the same center.
    CoincidentPair { a: usize, b: usize },
    /// A distance link or spring has zero current length.
    ZeroLength { a: usize, b: usize },
}

/// Trait for observing simulation steps.
///
/// Implement this trait to trace what a frame did (for debugging,
/// visualization, or profiling). All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called after all bodies have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each constraint relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// A ball touched the container wall and was reflected.
    fn on_boundary_contact(&mut self, _body: usize) {}

    /// Two balls overlapped and were separated.
    fn on_pair_collision(&mut self, _a: usize, _b: usize) {}

    /// A mass point hit the floor line.
    fn on_floor_contact(&mut self, _point: usize) {}

    /// A correction was skipped for this frame.
    fn on_degenerate(&mut self, _what: Degeneracy) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Running totals of everything a scene reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: u64,
    pub relaxation_passes: u64,
    pub boundary_contacts: u64,
    pub pair_collisions: u64,
    pub floor_contacts: u64,
    pub degenerate_skips: u64,
}

impl StepObserver for StepStats {
    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.relaxation_passes += 1;
    }

    fn on_boundary_contact(&mut self, _body: usize) {
        self.boundary_contacts += 1;
    }

    fn on_pair_collision(&mut self, _a: usize, _b: usize) {
        self.pair_collisions += 1;
    }

    fn on_floor_contact(&mut self, _point: usize) {
        self.floor_contacts += 1;
    }

    fn on_degenerate(&mut self, _what: Degeneracy) {
        self.degenerate_skips += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
