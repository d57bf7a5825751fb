//! Pointer input. Events are buffered as they arrive and applied once, at
//! the start of the next frame.

use crate::float::Float;
use crate::vec::Vec2;

/// A discrete pointer event from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent<F: Float> {
    Down(Vec2<F>),
    Move(Vec2<F>),
    Up,
}

/// What the scene has to do with the grabbed body this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GrabUpdate<F: Float> {
    /// Nothing held.
    Idle,
    /// Anchor `index` at `target`.
    Hold { index: usize, target: Vec2<F> },
    /// `index` was let go since the previous frame.
    Release { index: usize },
    /// A new press let go of `released` and picked `index`.
    Switch { released: usize, index: usize, target: Vec2<F> },
}

impl<F: Float> GrabUpdate<F> {
    /// Body whose grab ended this frame, if any.
    pub fn released(&self) -> Option<usize> {
        match *self {
            GrabUpdate::Release { index } => Some(index),
            GrabUpdate::Switch { released, .. } => Some(released),
            GrabUpdate::Idle | GrabUpdate::Hold { .. } => None,
        }
    }

    /// Body to anchor this frame and where.
    pub fn hold(&self) -> Option<(usize, Vec2<F>)> {
        match *self {
            GrabUpdate::Hold { index, target } | GrabUpdate::Switch { index, target, .. } => {
                Some((index, target))
            }
            GrabUpdate::Idle | GrabUpdate::Release { .. } => None,
        }
    }
}

/// Pointer grab state shared by every scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Grab<F: Float> {
    threshold_sq: F,
    cursor: Vec2<F>,
    pressed: bool,
    released: bool,
    held: Option<usize>,
}

impl<F: Float> Grab<F> {
    pub fn new(threshold_sq: F) -> Self {
        Grab {
            threshold_sq,
            cursor: Vec2::zero(),
            pressed: false,
            released: false,
            held: None,
        }
    }

    /// Record an event; nothing moves until [`Grab::begin_frame`].
    pub fn handle(&mut self, event: PointerEvent<F>) {
        match event {
            PointerEvent::Down(p) => {
                self.cursor = p;
                self.pressed = true;
                self.released = false;
            }
            PointerEvent::Move(p) => self.cursor = p,
            PointerEvent::Up => {
                self.pressed = false;
                self.released = true;
            }
        }
    }

    pub fn held(&self) -> Option<usize> {
        self.held
    }

    pub fn cursor(&self) -> Vec2<F> {
        self.cursor
    }

    /// Resolve buffered events against the current body positions.
    ///
    /// A press picks the body closest to the cursor among those strictly
    /// within the squared threshold; a press that hits nothing holds nothing.
    /// Whatever was held before a new press is always reported released.
    pub fn begin_frame<I>(&mut self, positions: I) -> GrabUpdate<F>
    where
        I: IntoIterator<Item = Vec2<F>>,
    {
        if self.released {
            self.released = false;
            return match self.held.take() {
                Some(index) => GrabUpdate::Release { index },
                None => GrabUpdate::Idle,
            };
        }
        if self.pressed {
            self.pressed = false;
            let previous = self.held.take();
            self.held = nearest_within(positions, self.cursor, self.threshold_sq);
            match (previous, self.held) {
                (Some(released), Some(index)) if released != index => {
                    return GrabUpdate::Switch { released, index, target: self.cursor };
                }
                (Some(index), None) => return GrabUpdate::Release { index },
                _ => {}
            }
        }
        match self.held {
            Some(index) => GrabUpdate::Hold { index, target: self.cursor },
            None => GrabUpdate::Idle,
        }
    }

    /// Forget everything, e.g. when the scene is rebuilt.
    pub fn clear(&mut self) {
        self.pressed = false;
        self.released = false;
        self.held = None;
    }
}

/// Index of the position nearest to `point` with squared distance below
/// `threshold_sq`. Ties keep the lowest index.
pub fn nearest_within<F, I>(positions: I, point: Vec2<F>, threshold_sq: F) -> Option<usize>
where
    F: Float,
    I: IntoIterator<Item = Vec2<F>>,
{
    let mut best: Option<(usize, F)> = None;
    for (i, pos) in positions.into_iter().enumerate() {
        let d = pos.distance_sq(point);
        if !(d < threshold_sq) {
            continue;
        }
        match best {
            Some((_, best_d)) if !(d < best_d) => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> [Vec2<f32>; 3] {
        [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(12.0, 0.0)]
    }

    #[test]
    fn picks_nearest_inside_threshold() {
        assert_eq!(nearest_within(positions(), Vec2::new(11.5, 0.0), 300.0), Some(2));
        assert_eq!(nearest_within(positions(), Vec2::new(100.0, 0.0), 300.0), None);
    }

    #[test]
    fn press_move_release_cycle() {
        let mut grab = Grab::new(300.0f32);
        assert_eq!(grab.begin_frame(positions()), GrabUpdate::Idle);

        grab.handle(PointerEvent::Down(Vec2::new(1.0, 1.0)));
        assert_eq!(
            grab.begin_frame(positions()),
            GrabUpdate::Hold { index: 0, target: Vec2::new(1.0, 1.0) }
        );

        grab.handle(PointerEvent::Move(Vec2::new(50.0, 50.0)));
        assert_eq!(
            grab.begin_frame(positions()),
            GrabUpdate::Hold { index: 0, target: Vec2::new(50.0, 50.0) }
        );

        grab.handle(PointerEvent::Up);
        assert_eq!(grab.begin_frame(positions()), GrabUpdate::Release { index: 0 });
        assert_eq!(grab.begin_frame(positions()), GrabUpdate::Idle);
    }

    #[test]
    fn new_press_releases_previous_body() {
        let mut grab = Grab::new(300.0f32);
        grab.handle(PointerEvent::Down(Vec2::new(0.0, 0.0)));
        assert_eq!(grab.begin_frame(positions()).hold(), Some((0, Vec2::new(0.0, 0.0))));

        // up and down again before the next frame
        grab.handle(PointerEvent::Up);
        grab.handle(PointerEvent::Down(Vec2::new(12.0, 1.0)));
        let update = grab.begin_frame(positions());
        assert_eq!(
            update,
            GrabUpdate::Switch { released: 0, index: 2, target: Vec2::new(12.0, 1.0) }
        );
        assert_eq!(update.released(), Some(0));
        assert_eq!(update.hold(), Some((2, Vec2::new(12.0, 1.0))));

        // a second press without an up
        grab.handle(PointerEvent::Down(Vec2::new(0.5, 0.0)));
        assert_eq!(grab.begin_frame(positions()).released(), Some(2));
        assert_eq!(grab.held(), Some(0));
    }

    #[test]
    fn repress_on_same_body_keeps_holding() {
        let mut grab = Grab::new(300.0f32);
        grab.handle(PointerEvent::Down(Vec2::new(0.0, 0.0)));
        grab.begin_frame(positions());
        grab.handle(PointerEvent::Down(Vec2::new(1.0, 0.0)));
        assert_eq!(
            grab.begin_frame(positions()),
            GrabUpdate::Hold { index: 0, target: Vec2::new(1.0, 0.0) }
        );
    }

    #[test]
    fn press_on_empty_space_holds_nothing() {
        let mut grab = Grab::new(300.0f32);
        grab.handle(PointerEvent::Down(Vec2::new(500.0, 500.0)));
        assert_eq!(grab.begin_frame(positions()), GrabUpdate::Idle);
        assert_eq!(grab.held(), None);
    }
}
