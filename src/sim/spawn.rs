//! Periodic body spawning at the top edge

use glam::Vec2;
use rand::Rng;

use super::body::{Body, Color};
use super::state::{Arena, SimulationState};
use crate::config::SimConfig;

/// Spawn rules derived from the config
#[derive(Debug, Clone)]
pub struct Spawner {
    interval_ms: f64,
    radius_min: u32,
    radius_max: u32,
    x_min: u32,
    x_max: u32,
    palette: Vec<Color>,
    max_bodies: Option<usize>,
}

impl Spawner {
    /// Expects a validated config
    pub fn new(config: &SimConfig, arena: &Arena) -> Self {
        let [radius_min, radius_max] = config.spawn_radius_range;
        let x_min = config.spawn_x_margin;
        let x_max = (arena.width.floor() as u32).saturating_sub(config.spawn_x_margin);
        Self {
            interval_ms: config.spawn_interval_ms,
            radius_min,
            radius_max,
            x_min,
            x_max: x_max.max(x_min),
            palette: config.color_palette.clone(),
            max_bodies: config.max_bodies,
        }
    }

    /// First call always fires; afterwards only once the interval is strictly exceeded
    pub fn is_due(&self, state: &SimulationState, timestamp: f64) -> bool {
        if let Some(cap) = self.max_bodies {
            if state.bodies.len() >= cap {
                return false;
            }
        }
        match state.last_spawn_time {
            None => true,
            Some(last) => timestamp - last > self.interval_ms,
        }
    }

    /// Build a new body at rest on the top edge
    pub fn spawn_body<R: Rng>(&self, rng: &mut R) -> Body {
        let x = rng.random_range(self.x_min..=self.x_max) as f32;
        let radius = rng.random_range(self.radius_min..=self.radius_max) as f32;
        let color = self.palette[rng.random_range(0..self.palette.len())];
        Body::new(Vec2::new(x, 0.0), radius, color)
    }

    /// Append a body if one is due. Returns true when a body was added.
    pub fn maybe_spawn<R: Rng>(
        &self,
        state: &mut SimulationState,
        timestamp: f64,
        rng: &mut R,
    ) -> bool {
        if !self.is_due(state, timestamp) {
            return false;
        }
        let body = self.spawn_body(rng);
        log::debug!(
            "spawn #{} at x={} r={} ({}) t={timestamp}",
            state.bodies.len(),
            body.pos.x,
            body.radius(),
            body.color.as_str()
        );
        state.bodies.push(body);
        state.last_spawn_time = Some(timestamp);
        true
    }
}
