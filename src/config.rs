//! Simulation configuration
//!
//! Replaces the implicit globals (arena size, gravity, bounce factor) with an
//! explicit value handed to [`Simulation`](crate::Simulation) at construction.
//! Loadable from JSON; any missing field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::Color;

/// Simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Downward acceleration added to `vy` every tick
    pub gravity: f32,
    /// Shared by floor, wall and pair collisions (0.0 - 1.0)
    pub restitution: f32,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Spawning ===
    /// Minimum gap between spawns; a spawn fires once this is strictly exceeded
    pub spawn_interval_ms: f64,
    /// Inclusive integer radius range `[min, max]`
    pub spawn_radius_range: [u32; 2],
    /// Horizontal spawn band is `[margin, arena_width - margin]`
    pub spawn_x_margin: u32,
    /// Spawner stops once this many bodies exist (`None` = grow forever)
    pub max_bodies: Option<usize>,

    /// Floor bounces with `|vy|` below this are zeroed
    pub velocity_zero_threshold: f32,
    /// Cosmetic tags picked uniformly for new bodies
    pub color_palette: Vec<Color>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: RESTITUTION,

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_radius_range: [SPAWN_RADIUS_MIN, SPAWN_RADIUS_MAX],
            spawn_x_margin: SPAWN_X_MARGIN,
            max_bodies: None,

            velocity_zero_threshold: VELOCITY_ZERO_THRESHOLD,
            color_palette: Color::ALL.to_vec(),
        }
    }
}

impl SimConfig {
    /// Check every value against the ranges the physics can handle
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(invalid("gravity must be finite"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(invalid(format!(
                "restitution must be in [0, 1], got {}",
                self.restitution
            )));
        }

        let [r_min, r_max] = self.spawn_radius_range;
        if r_min == 0 {
            return Err(invalid("spawn radius must be > 0"));
        }
        if r_min > r_max {
            return Err(invalid(format!(
                "spawn radius range is empty: [{r_min}, {r_max}]"
            )));
        }

        // A body wider than the arena would be clamped against only one wall
        let max_diameter = 2.0 * r_max as f32;
        for (name, extent) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
        ] {
            if !extent.is_finite() || extent <= max_diameter {
                return Err(invalid(format!(
                    "{name} must exceed twice the max spawn radius ({max_diameter}), got {extent}"
                )));
            }
        }

        if 2.0 * self.spawn_x_margin as f32 > self.arena_width {
            return Err(invalid(format!(
                "spawn_x_margin {} leaves no room in an arena {} wide",
                self.spawn_x_margin, self.arena_width
            )));
        }
        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms <= 0.0 {
            return Err(invalid("spawn_interval_ms must be finite and > 0"));
        }
        if !self.velocity_zero_threshold.is_finite() || self.velocity_zero_threshold < 0.0 {
            return Err(invalid("velocity_zero_threshold must be finite and >= 0"));
        }
        if self.color_palette.is_empty() {
            return Err(invalid("color_palette must not be empty"));
        }

        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidConfig(msg.into())
}
