//! Scene dispatch: one enum over the three simulations, plus the table that
//! maps a scene identifier to its constructor.

use crate::balls::BallScene;
use crate::cloth::ClothScene;
use crate::config::{BallSceneConfig, ClothConfig, SceneConfigs, SoftBodyConfig};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::input::PointerEvent;
use crate::observer::StepObserver;
use crate::snapshot::Snapshot;
use crate::softbody::SoftBodyScene;
use crate::timestep::Timestep;
use core::fmt;
use core::str::FromStr;

/// Identifier of a simulation variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Balls,
    Cloth,
    SoftBody,
}

impl SceneKind {
    pub const ALL: [SceneKind; 3] = [SceneKind::Balls, SceneKind::Cloth, SceneKind::SoftBody];

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Balls => "balls",
            SceneKind::Cloth => "cloth",
            SceneKind::SoftBody => "softbody",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SceneKind::Balls => "balls bouncing inside a circle",
            SceneKind::Cloth => "Verlet cloth pinned at its corners",
            SceneKind::SoftBody => "spring-mass wheel dropping onto a floor",
        }
    }

    /// 60 fps everywhere; the ball scene runs ten times faster than real time.
    pub fn default_timestep<F: Float>(self) -> Timestep<F> {
        match self {
            SceneKind::Balls => Timestep::new(60).with_time_scale(F::from_f32(10.0)),
            SceneKind::Cloth | SceneKind::SoftBody => Timestep::new(60),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = PhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PhysicsError::UnknownScene(s.into()))
    }
}

/// A running simulation of any kind.
pub enum Playground<F: Float> {
    Balls(BallScene<F>),
    Cloth(ClothScene<F>),
    SoftBody(SoftBodyScene<F>),
}

impl<F: Float> Playground<F> {
    /// Build `kind` with its default configuration.
    pub fn new(kind: SceneKind) -> Result<Self, PhysicsError> {
        match kind {
            SceneKind::Balls => Ok(Playground::Balls(BallScene::new(BallSceneConfig::new())?)),
            SceneKind::Cloth => Ok(Playground::Cloth(ClothScene::new(ClothConfig::new())?)),
            SceneKind::SoftBody => Ok(Playground::SoftBody(SoftBodyScene::new(SoftBodyConfig::new())?)),
        }
    }

    /// Build `kind` from its section of `configs`.
    pub fn from_configs(kind: SceneKind, configs: &SceneConfigs<F>) -> Result<Self, PhysicsError> {
        match kind {
            SceneKind::Balls => Ok(Playground::Balls(BallScene::new(configs.balls.clone())?)),
            SceneKind::Cloth => Ok(Playground::Cloth(ClothScene::new(configs.cloth.clone())?)),
            SceneKind::SoftBody => Ok(Playground::SoftBody(SoftBodyScene::new(configs.softbody.clone())?)),
        }
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Playground::Balls(_) => SceneKind::Balls,
            Playground::Cloth(_) => SceneKind::Cloth,
            Playground::SoftBody(_) => SceneKind::SoftBody,
        }
    }

    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        match self {
            Playground::Balls(s) => s.step(dt, observer),
            Playground::Cloth(s) => s.step(dt, observer),
            Playground::SoftBody(s) => s.step(dt, observer),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent<F>) {
        match self {
            Playground::Balls(s) => s.handle_pointer(event),
            Playground::Cloth(s) => s.handle_pointer(event),
            Playground::SoftBody(s) => s.handle_pointer(event),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Playground::Balls(s) => s.reset(),
            Playground::Cloth(s) => s.reset(),
            Playground::SoftBody(s) => s.reset(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<F> {
        match self {
            Playground::Balls(s) => s.snapshot(),
            Playground::Cloth(s) => s.snapshot(),
            Playground::SoftBody(s) => s.snapshot(),
        }
    }

    pub fn body_count(&self) -> usize {
        match self {
            Playground::Balls(s) => s.body_count(),
            Playground::Cloth(s) => s.body_count(),
            Playground::SoftBody(s) => s.body_count(),
        }
    }
}

impl<F: Float> From<BallScene<F>> for Playground<F> {
    fn from(scene: BallScene<F>) -> Self {
        Playground::Balls(scene)
    }
}

impl<F: Float> From<ClothScene<F>> for Playground<F> {
    fn from(scene: ClothScene<F>) -> Self {
        Playground::Cloth(scene)
    }
}

impl<F: Float> From<SoftBodyScene<F>> for Playground<F> {
    fn from(scene: SoftBodyScene<F>) -> Self {
        Playground::SoftBody(scene)
    }
}
