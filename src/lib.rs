//! Small real-time 2D physics playgrounds.
//!
//! `boing` provides three independent simulations sharing one shape: an arena
//! of point-like bodies, a per-frame integrate-then-resolve pipeline, and a
//! read-only [`Snapshot`] for whatever draws the result.
//!
//! # Features
//!
//! - **Bouncing balls**: semi-implicit Euler disks in a circular container
//!   with elastic wall and equal-mass pair collisions
//! - **Verlet cloth**: a pinned grid relaxed with position-based distance links
//! - **Soft body**: damped springs on a wheel of mass points with a floor bounce
//! - **Pointer grabs**: pick, drag and release any body between frames
//! - **Observable**: monitor contacts and skipped degeneracies via `StepObserver`
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod integrator;
pub mod ball;
pub mod particle;
pub mod point;
pub mod collision;
pub mod constraint;
pub mod spring;
pub mod balls;
pub mod cloth;
pub mod softbody;
pub mod scene;
pub mod snapshot;
pub mod input;
pub mod timestep;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use ball::{Ball, Tint};
pub use particle::ClothNode;
pub use point::MassPoint;
pub use collision::{Contact, Container, Floor};
pub use constraint::DistanceLink;
pub use spring::Spring;
pub use balls::BallScene;
pub use cloth::ClothScene;
pub use softbody::SoftBodyScene;
pub use scene::{Playground, SceneKind};
pub use snapshot::{Appearance, BodyView, Boundary, LinkView, Snapshot};
pub use input::{Grab, GrabUpdate, PointerEvent};
pub use timestep::Timestep;
pub use config::{BallSceneConfig, ClothConfig, PinPattern, SceneConfigs, SoftBodyConfig};
pub use observer::{Degeneracy, NoOpStepObserver, StepObserver, StepStats};
pub use error::PhysicsError;
