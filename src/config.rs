//! Scene configuration: every tunable constant, with the playground defaults.
//!
//! Coordinates are screen space on a 1000x1000 canvas with y pointing down,
//! so the default gravity is `(0, 9.8)`.
//!
//! # Builder Pattern
//! ```
//! use boing::config::ClothConfig;
//! use boing::vec::Vec2;
//!
//! let config: ClothConfig<f32> = ClothConfig::new()
//!     .with_grid(12, 8)
//!     .with_spacing(30.0)
//!     .with_iterations(8)
//!     .with_gravity(Vec2::new(0.0, 20.0));
//! assert!(config.validate().is_ok());
//! ```

use crate::collision::Floor;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// Side length of the default square canvas.
pub const CANVAS_SIZE: f32 = 1000.0;
/// Default squared pick radius for pointer grabs.
pub const GRAB_THRESHOLD_SQ: f32 = 300.0;
/// Inclusive range for the soft body's live point count.
pub const MIN_SOFT_POINTS: usize = 3;
pub const MAX_SOFT_POINTS: usize = 30;

fn positive<F: Float>(value: F, field: &'static str) -> Result<(), PhysicsError> {
    if value.is_positive() { Ok(()) } else { Err(PhysicsError::NonPositive { field }) }
}

fn non_negative<F: Float>(value: F, field: &'static str) -> Result<(), PhysicsError> {
    if value.is_finite() && !(value < F::zero()) {
        Ok(())
    } else {
        Err(PhysicsError::Negative { field })
    }
}

fn finite<F: Float>(value: Vec2<F>, field: &'static str) -> Result<(), PhysicsError> {
    if value.is_finite() { Ok(()) } else { Err(PhysicsError::NonFinite { field }) }
}

/// Balls bouncing inside a circular container.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BallSceneConfig<F: Float> {
    pub gravity: Vec2<F>,
    pub container_center: Vec2<F>,
    pub container_radius: F,
    pub ball_radius: F,
    pub ball_count: usize,
    /// Spawn velocity components are drawn from `[-spawn_speed, spawn_speed]`.
    pub spawn_speed: F,
    pub seed: u64,
    pub grab_threshold_sq: F,
}

impl<F: Float> BallSceneConfig<F> {
    pub fn new() -> Self {
        let half = F::from_f32(CANVAS_SIZE * 0.5);
        BallSceneConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(9.8)),
            container_center: Vec2::new(half, half),
            container_radius: F::from_f32(300.0),
            ball_radius: F::from_f32(15.0),
            ball_count: 10,
            spawn_speed: F::two(),
            seed: 0x0b01_6b01,
            grab_threshold_sq: F::from_f32(GRAB_THRESHOLD_SQ),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_container(mut self, center: Vec2<F>, radius: F) -> Self {
        self.container_center = center;
        self.container_radius = radius;
        self
    }

    pub fn with_ball_radius(mut self, radius: F) -> Self {
        self.ball_radius = radius;
        self
    }

    pub fn with_ball_count(mut self, count: usize) -> Self {
        self.ball_count = count;
        self
    }

    pub fn with_spawn_speed(mut self, speed: F) -> Self {
        self.spawn_speed = speed;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        finite(self.gravity, "gravity")?;
        finite(self.container_center, "container center")?;
        positive(self.container_radius, "container radius")?;
        positive(self.ball_radius, "ball radius")?;
        non_negative(self.spawn_speed, "spawn speed")?;
        non_negative(self.grab_threshold_sq, "grab threshold")?;
        if !(self.container_radius > self.ball_radius) {
            return Err(PhysicsError::ContainerTooSmall);
        }
        Ok(())
    }
}

impl<F: Float> Default for BallSceneConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Which cloth nodes start pinned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PinPattern {
    /// The four corner nodes.
    Corners,
    /// Every node in row 0.
    TopRow,
    /// Nothing pinned; the cloth falls freely.
    Unpinned,
}

impl PinPattern {
    pub fn is_pinned(self, col: usize, row: usize, cols: usize, rows: usize) -> bool {
        match self {
            PinPattern::Corners => (col == 0 || col == cols - 1) && (row == 0 || row == rows - 1),
            PinPattern::TopRow => row == 0,
            PinPattern::Unpinned => false,
        }
    }
}

/// A rectangular cloth of Verlet nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClothConfig<F: Float> {
    pub gravity: Vec2<F>,
    pub cols: usize,
    pub rows: usize,
    pub spacing: F,
    /// Position of node (0, 0). `None` centers the grid on the canvas.
    pub origin: Option<Vec2<F>>,
    /// Relaxation passes over all links per frame.
    pub iterations: usize,
    pub pins: PinPattern,
    /// Draw radius of a node.
    pub node_radius: F,
    pub grab_threshold_sq: F,
}

impl<F: Float> ClothConfig<F> {
    pub fn new() -> Self {
        ClothConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(9.8)),
            cols: 10,
            rows: 10,
            spacing: F::from_f32(50.0),
            origin: None,
            iterations: 5,
            pins: PinPattern::Corners,
            node_radius: F::from_f32(10.0),
            grab_threshold_sq: F::from_f32(GRAB_THRESHOLD_SQ),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_grid(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_pins(mut self, pins: PinPattern) -> Self {
        self.pins = pins;
        self
    }

    /// Top-left node position: the explicit origin, or the grid centered on
    /// the canvas.
    pub fn resolved_origin(&self) -> Vec2<F> {
        self.origin.unwrap_or_else(|| {
            let canvas = F::from_f32(CANVAS_SIZE);
            let span_x = F::from_usize(self.cols.saturating_sub(1)) * self.spacing;
            let span_y = F::from_usize(self.rows.saturating_sub(1)) * self.spacing;
            Vec2::new((canvas - span_x) * F::half(), (canvas - span_y) * F::half())
        })
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        finite(self.gravity, "gravity")?;
        if self.cols < 2 || self.rows < 2 {
            return Err(PhysicsError::InvalidGridDimensions { cols: self.cols, rows: self.rows });
        }
        positive(self.spacing, "spacing")?;
        if let Some(origin) = self.origin {
            finite(origin, "origin")?;
        }
        if self.iterations == 0 {
            return Err(PhysicsError::NoIterations);
        }
        positive(self.node_radius, "node radius")?;
        non_negative(self.grab_threshold_sq, "grab threshold")?;
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A ring of mass points around a center point, joined by damped springs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SoftBodyConfig<F: Float> {
    pub gravity: Vec2<F>,
    /// Multiplier on `gravity * mass`; the soft body falls faster than the
    /// other scenes for the same gravity.
    pub gravity_scale: F,
    pub center: Vec2<F>,
    pub radius: F,
    /// Perimeter points, live-adjustable in `3..=30`.
    pub point_count: usize,
    pub perimeter_stiffness: F,
    pub center_stiffness: F,
    pub damping: F,
    pub point_mass: F,
    pub floor: Floor<F>,
    /// Draw radius of a point.
    pub point_radius: F,
    pub grab_threshold_sq: F,
}

impl<F: Float> SoftBodyConfig<F> {
    pub fn new() -> Self {
        SoftBodyConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(9.8)),
            gravity_scale: F::from_f32(20.0),
            center: Vec2::new(F::from_f32(CANVAS_SIZE * 0.5), F::from_f32(200.0)),
            radius: F::from_f32(100.0),
            point_count: MIN_SOFT_POINTS,
            perimeter_stiffness: F::from_f32(800.0),
            center_stiffness: F::from_f32(500.0),
            damping: F::one(),
            point_mass: F::one(),
            floor: Floor::new(F::from_f32(850.0), F::from_f32(0.4), F::from_f32(0.9)),
            point_radius: F::from_f32(8.0),
            grab_threshold_sq: F::from_f32(GRAB_THRESHOLD_SQ),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_point_count(mut self, count: usize) -> Self {
        self.point_count = count;
        self
    }

    pub fn with_shape(mut self, center: Vec2<F>, radius: F) -> Self {
        self.center = center;
        self.radius = radius;
        self
    }

    pub fn with_stiffness(mut self, perimeter: F, center: F) -> Self {
        self.perimeter_stiffness = perimeter;
        self.center_stiffness = center;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_floor(mut self, floor: Floor<F>) -> Self {
        self.floor = floor;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        finite(self.gravity, "gravity")?;
        non_negative(self.gravity_scale, "gravity scale")?;
        finite(self.center, "center")?;
        positive(self.radius, "radius")?;
        if !(MIN_SOFT_POINTS..=MAX_SOFT_POINTS).contains(&self.point_count) {
            return Err(PhysicsError::PointCountOutOfRange {
                count: self.point_count,
                min: MIN_SOFT_POINTS,
                max: MAX_SOFT_POINTS,
            });
        }
        non_negative(self.perimeter_stiffness, "perimeter stiffness")?;
        non_negative(self.center_stiffness, "center stiffness")?;
        non_negative(self.damping, "damping")?;
        positive(self.point_mass, "point mass")?;
        if !self.floor.y.is_finite() {
            return Err(PhysicsError::NonFinite { field: "floor" });
        }
        non_negative(self.floor.restitution, "floor restitution")?;
        non_negative(self.floor.friction, "floor friction")?;
        positive(self.point_radius, "point radius")?;
        non_negative(self.grab_threshold_sq, "grab threshold")?;
        Ok(())
    }
}

impl<F: Float> Default for SoftBodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// One configuration per scene, e.g. loaded from a scenario file. Missing
/// sections fall back to the defaults.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfigs<F: Float> {
    pub balls: BallSceneConfig<F>,
    pub cloth: ClothConfig<F>,
    pub softbody: SoftBodyConfig<F>,
}

impl<F: Float> SceneConfigs<F> {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.balls.validate()?;
        self.cloth.validate()?;
        self.softbody.validate()
    }
}
