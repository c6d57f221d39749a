//! Arena bounds and the mutable simulation state

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::Body;

/// Fixed rectangle the bodies live in
///
/// `y = 0` is the top edge, `y = height` the floor. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when the whole circle lies between the side walls and above the floor
    pub fn contains(&self, body: &Body) -> bool {
        let r = body.radius();
        body.pos.x - r >= 0.0 && body.pos.x + r <= self.width && body.pos.y + r <= self.height
    }
}

/// Everything that changes from tick to tick
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    /// Spawn order, which is also draw order. Append-only.
    pub bodies: Vec<Body>,
    /// Timestamp (ms) of the most recent spawn, `None` before the first
    pub last_spawn_time: Option<f64>,
    /// Steps taken since start
    pub tick_count: u64,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total kinetic energy of all bodies
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

/// Seeded PCG generator used for spawning
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
