//! Body record and its cosmetic tag

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cosmetic color tag carried by each body (no physical meaning)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// Default spawn palette, in pick order
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }
}

/// A falling circle
///
/// `mass` always equals `radius`; both are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    mass: f32,
    pub color: Color,
}

impl Body {
    /// Create a body at rest
    ///
    /// `radius` must be finite and positive; use [`Body::try_new`] for
    /// unchecked input.
    pub fn new(pos: Vec2, radius: f32, color: Color) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            mass: radius,
            color,
        }
    }

    /// Create a body at rest, rejecting radii the physics can't divide by
    pub fn try_new(pos: Vec2, radius: f32, color: Color) -> Result<Self> {
        let body = Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            mass: radius,
            color,
        };
        body.check()?;
        Ok(body)
    }

    /// Finite state and a positive finite radius
    pub fn check(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidBody(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if !self.pos.is_finite() || !self.vel.is_finite() {
            return Err(Error::InvalidBody(
                "position and velocity must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Builder-style initial velocity
    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn inv_mass(&self) -> f32 {
        1.0 / self.mass
    }

    /// Kinetic energy `m v² / 2`
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// Read-only snapshot for drawing
    pub fn view(&self) -> BodyView {
        BodyView {
            x: self.pos.x,
            y: self.pos.y,
            radius: self.radius,
            color: self.color,
        }
    }
}

/// What a renderer needs to draw one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}
