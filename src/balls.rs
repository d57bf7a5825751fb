//! Bouncing balls inside a circular container.

use crate::ball::{Ball, Tint};
use crate::collision::{resolve_pairs, Container};
use crate::config::BallSceneConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::input::{Grab, PointerEvent};
use crate::observer::StepObserver;
use crate::snapshot::{Appearance, BodyView, Boundary, Snapshot};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Rejection-sampling attempts per ball before sampling the reachable disk
/// directly.
const SPAWN_ATTEMPTS: usize = 1000;

/// Equal-mass disks under gravity, kept inside a circle and colliding
/// pairwise.
pub struct BallScene<F: Float> {
    config: BallSceneConfig<F>,
    container: Container<F>,
    balls: AllocVec<Ball<F>>,
    rng: SmallRng,
    grab: Grab<F>,
}

impl<F: Float> BallScene<F> {
    /// Spawn `ball_count` balls at random positions inside the container.
    pub fn new(config: BallSceneConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        let container = Container::new(config.container_center, config.container_radius);
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let balls = spawn(&config, &container, &mut rng);
        let grab = Grab::new(config.grab_threshold_sq);
        Ok(BallScene { config, container, balls, rng, grab })
    }

    /// Use the given balls instead of random ones. Every ball gets the
    /// configured radius.
    pub fn with_balls<I>(config: BallSceneConfig<F>, balls: I) -> Result<Self, PhysicsError>
    where
        I: IntoIterator<Item = (Vec2<F>, Vec2<F>)>,
    {
        config.validate()?;
        let container = Container::new(config.container_center, config.container_radius);
        let balls = balls
            .into_iter()
            .map(|(pos, vel)| Ball::new(pos, vel, config.ball_radius, Tint::Red))
            .collect();
        let rng = SmallRng::seed_from_u64(config.seed);
        let grab = Grab::new(config.grab_threshold_sq);
        Ok(BallScene { config, container, balls, rng, grab })
    }

    pub fn handle_pointer(&mut self, event: PointerEvent<F>) {
        self.grab.handle(event);
    }

    /// One frame: grab, integrate, wall contacts, then pair contacts.
    /// Every ball ends the frame inside the container.
    ///
    /// A frame with `dt <= 0` changes nothing; buffered input waits for the
    /// next real frame.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if !(dt > F::zero()) {
            return;
        }

        // balls carry no grabbed flag, so a release needs no bookkeeping
        let update = self.grab.begin_frame(self.balls.iter().map(|b| b.pos));
        let held = update.hold().map(|(index, target)| {
            self.balls[index].hold_at(target);
            index
        });

        for (i, ball) in self.balls.iter_mut().enumerate() {
            if held != Some(i) {
                ball.integrate(self.config.gravity, dt);
            }
        }
        observer.on_integrate();

        self.container.resolve_all(&mut self.balls, observer);
        resolve_pairs(&mut self.balls, observer);
        // pair separation can push a ball back through the wall
        for ball in self.balls.iter_mut() {
            self.container.clamp(ball);
        }

        observer.on_step_complete();
    }

    /// Replace every ball with a fresh random layout. The generator keeps
    /// running, so consecutive resets differ.
    pub fn reset(&mut self) {
        self.balls = spawn(&self.config, &self.container, &mut self.rng);
        self.grab.clear();
    }

    pub fn snapshot(&self) -> Snapshot<F> {
        let held = self.grab.held();
        let bodies = self
            .balls
            .iter()
            .enumerate()
            .map(|(i, b)| BodyView {
                position: b.pos,
                radius: b.radius,
                appearance: if held == Some(i) { Appearance::Grabbed } else { Appearance::Tint(b.tint) },
            })
            .collect();
        Snapshot {
            bodies,
            links: AllocVec::new(),
            boundary: Boundary::Circle(self.container),
        }
    }

    /// Sum of `½|v|²` over all balls.
    pub fn kinetic_energy(&self) -> F {
        self.balls.iter().fold(F::zero(), |acc, b| acc + b.kinetic_energy())
    }

    pub fn balls(&self) -> &[Ball<F>] { &self.balls }
    pub fn ball(&self, index: usize) -> &Ball<F> { &self.balls[index] }
    pub fn ball_mut(&mut self, index: usize) -> &mut Ball<F> { &mut self.balls[index] }
    pub fn container(&self) -> &Container<F> { &self.container }
    pub fn config(&self) -> &BallSceneConfig<F> { &self.config }
    pub fn body_count(&self) -> usize { self.balls.len() }
}

/// Symmetric sample in `[-half_width, half_width)`.
fn uniform<F: Float>(rng: &mut SmallRng, half_width: F) -> F {
    F::from_f32(rng.gen::<f32>() * 2.0 - 1.0) * half_width
}

/// Random point strictly closer than `reach` to `center`. Used when the
/// square sampler keeps missing, so balls never stack on one spot.
fn inside_disk<F: Float>(rng: &mut SmallRng, center: Vec2<F>, reach: F) -> Vec2<F> {
    let angle = F::from_f32(rng.gen::<f32>()) * F::two() * F::pi();
    let dist = F::from_f32(rng.gen::<f32>()) * reach;
    center + Vec2::new(angle.cos(), angle.sin()) * dist
}

fn spawn<F: Float>(
    config: &BallSceneConfig<F>,
    container: &Container<F>,
    rng: &mut SmallRng,
) -> AllocVec<Ball<F>> {
    let half_box = container.radius * F::half();
    let mut balls = AllocVec::with_capacity(config.ball_count);
    for _ in 0..config.ball_count {
        let mut found = None;
        for _ in 0..SPAWN_ATTEMPTS {
            let candidate = container.center + Vec2::new(uniform(rng, half_box), uniform(rng, half_box));
            if candidate.distance(container.center) + config.ball_radius < container.radius {
                found = Some(candidate);
                break;
            }
        }
        let pos = match found {
            Some(pos) => pos,
            None => inside_disk(rng, container.center, container.radius - config.ball_radius),
        };
        let vel = Vec2::new(uniform(rng, config.spawn_speed), uniform(rng, config.spawn_speed));
        let tint = if rng.gen::<bool>() { Tint::Red } else { Tint::Blue };
        balls.push(Ball::new(pos, vel, config.ball_radius, tint));
    }
    balls
}
