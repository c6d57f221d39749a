//! Simulation module
//!
//! All physics lives here, free of rendering and timing concerns:
//! - Frame-based steps (one call = one tick, no `dt`)
//! - Injectable RNG for spawning
//! - Stable iteration order (spawn order)

pub mod body;
pub mod collision;
pub mod integrate;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::{Body, BodyView, Color};
pub use collision::{BoundaryHit, Contact, Side, resolve_boundary, resolve_pair};
pub use integrate::integrate;
pub use spawn::Spawner;
pub use state::{Arena, SimulationState, seeded_rng};
pub use tick::{Simulation, StepStats, resolve_all_pairs, update_body};
