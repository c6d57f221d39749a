//! Collision detection and response
//!
//! Two kinds of contact:
//! - body vs. arena (floor and side walls; the top is open)
//! - body vs. body (circle overlap, symmetric push-apart, then an impulse)

use glam::Vec2;

use super::body::Body;
use super::state::Arena;

/// Which side wall a body was pushed off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Outcome of a boundary check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryHit {
    pub floor: bool,
    pub side: Option<Side>,
}

impl BoundaryHit {
    pub fn any(&self) -> bool {
        self.floor || self.side.is_some()
    }
}

/// Clamp a body back inside the arena and reflect its velocity
///
/// Left and right are exclusive: with `radius > width / 2` only the left wall
/// is applied. Config validation keeps spawned bodies out of that case.
pub fn resolve_boundary(
    body: &mut Body,
    arena: &Arena,
    restitution: f32,
    velocity_zero_threshold: f32,
) -> BoundaryHit {
    let r = body.radius();
    let mut hit = BoundaryHit::default();

    if body.pos.y + r > arena.height {
        body.pos.y = arena.height - r;
        body.vel.y = -body.vel.y * restitution;
        // Stop endless micro-bounces
        if body.vel.y.abs() < velocity_zero_threshold {
            body.vel.y = 0.0;
        }
        hit.floor = true;
    }

    if body.pos.x - r < 0.0 {
        body.pos.x = r;
        body.vel.x = -body.vel.x * restitution;
        hit.side = Some(Side::Left);
    } else if body.pos.x + r > arena.width {
        body.pos.x = arena.width - r;
        body.vel.x = -body.vel.x * restitution;
        hit.side = Some(Side::Right);
    }

    hit
}

/// Result of resolving an overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from `a` toward `b`
    pub normal: Vec2,
    /// Overlap depth before correction (`min_dist - distance`)
    pub penetration: f32,
    /// Impulse magnitude applied along `normal` (0 when already separating)
    pub impulse: f32,
}

/// Resolve a circle-circle overlap
///
/// Returns `None` when the circles don't overlap, or when their centers
/// coincide exactly and no contact normal exists.
///
/// Position correction is split evenly regardless of mass. The impulse is
/// skipped when the bodies are already moving apart, but the positional
/// correction still applies.
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f32) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_dist = a.radius() + b.radius();

    if distance >= min_dist || distance == 0.0 {
        return None;
    }

    let penetration = min_dist - distance;
    let normal = delta / distance;
    let correction = normal * (penetration / 2.0);
    a.pos -= correction;
    b.pos += correction;

    let vel_along_normal = (b.vel - a.vel).dot(normal);
    if vel_along_normal > 0.0 {
        return Some(Contact {
            normal,
            penetration,
            impulse: 0.0,
        });
    }

    let impulse = -(1.0 + restitution) * vel_along_normal / (a.inv_mass() + b.inv_mass());
    let impulse_vec = normal * impulse;
    a.vel -= impulse_vec * a.inv_mass();
    b.vel += impulse_vec * b.inv_mass();

    Some(Contact {
        normal,
        penetration,
        impulse,
    })
}
