//! Circle Drop - falling circles in a box
//!
//! Core modules:
//! - `sim`: Step-driven simulation (integration, wall bounces, pair collisions, spawning)
//! - `renderer`: Draw-side collaborators that receive the body list after each step
//! - `platform`: Tick sources that drive the simulation
//! - `config`: Tunable constants with validation

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use sim::{Body, Simulation, StepStats};

/// Default simulation constants
pub mod consts {
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Fraction of velocity kept on a bounce (1.0 = perfectly elastic)
    pub const RESTITUTION: f32 = 1.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Spawn cadence (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Inclusive integer radius range for spawned circles
    pub const SPAWN_RADIUS_MIN: u32 = 20;
    pub const SPAWN_RADIUS_MAX: u32 = 40;
    /// Keep spawns this far from the side walls
    pub const SPAWN_X_MARGIN: u32 = 50;

    /// Floor bounces slower than this stop dead
    pub const VELOCITY_ZERO_THRESHOLD: f32 = 1.0;

    /// Target frame rate of the native ticker
    pub const TARGET_HZ: f64 = 60.0;
}
