//! Simulation step
//!
//! One call per frame: spawn if due, move and wall-bounce every body, resolve
//! every pair once, then hand the finished frame to the renderer.

use rand::Rng;
use rand_pcg::Pcg32;

use super::body::Body;
use super::collision::{resolve_boundary, resolve_pair};
use super::integrate::integrate;
use super::spawn::Spawner;
use super::state::{Arena, SimulationState, seeded_rng};
use crate::config::SimConfig;
use crate::error::Result;
use crate::renderer::{Frame, NullRenderer, Renderer};

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub spawned: bool,
    /// Bodies that touched the floor or a side wall
    pub boundary_hits: usize,
    /// Overlapping pairs that were pushed apart
    pub contacts: usize,
}

/// Integrate one body and keep it inside the arena
#[inline]
pub fn update_body(body: &mut Body, arena: &Arena, config: &SimConfig) -> bool {
    integrate(body, config.gravity);
    resolve_boundary(
        body,
        arena,
        config.restitution,
        config.velocity_zero_threshold,
    )
    .any()
}

/// Resolve every unordered pair once, in `(i, j)` order with `i < j`
///
/// Pairs are not revisited after a correction, so with three or more bodies
/// in mutual contact the result depends on sequence order.
pub fn resolve_all_pairs(bodies: &mut [Body], restitution: f32) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b, restitution).is_some() {
                contacts += 1;
            }
        }
    }
    contacts
}

/// The running simulation: config, arena, state and spawn RNG
pub struct Simulation<R: Rng = Pcg32> {
    config: SimConfig,
    arena: Arena,
    spawner: Spawner,
    state: SimulationState,
    rng: R,
}

impl Simulation<Pcg32> {
    /// Create a simulation with a seeded PCG spawn generator
    pub fn new(config: SimConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, seeded_rng(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Create a simulation with a caller-provided random source
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let arena = Arena::new(config.arena_width, config.arena_height);
        let spawner = Spawner::new(&config, &arena);
        log::info!(
            "Simulation ready: arena {}x{}, g={}, e={}",
            arena.width,
            arena.height,
            config.gravity,
            config.restitution
        );
        Ok(Self {
            config,
            arena,
            spawner,
            state: SimulationState::new(),
            rng,
        })
    }

    /// Advance one tick and draw the result
    pub fn step<Rd: Renderer + ?Sized>(&mut self, timestamp: f64, renderer: &mut Rd) -> StepStats {
        let mut stats = StepStats {
            spawned: self
                .spawner
                .maybe_spawn(&mut self.state, timestamp, &mut self.rng),
            ..Default::default()
        };

        for body in &mut self.state.bodies {
            if update_body(body, &self.arena, &self.config) {
                stats.boundary_hits += 1;
            }
        }

        stats.contacts = resolve_all_pairs(&mut self.state.bodies, self.config.restitution);
        self.state.tick_count += 1;

        log::trace!(
            "tick {} t={timestamp}: {} bodies, {} wall hits, {} contacts",
            self.state.tick_count,
            self.state.bodies.len(),
            stats.boundary_hits,
            stats.contacts
        );

        renderer.render(&Frame {
            tick: self.state.tick_count,
            timestamp,
            arena: &self.arena,
            bodies: &self.state.bodies,
        });

        stats
    }

    /// Advance one tick without drawing
    pub fn advance(&mut self, timestamp: f64) -> StepStats {
        self.step(timestamp, &mut NullRenderer)
    }

    /// Place a body directly (scenes, tests). Mass still follows radius.
    ///
    /// Bodies with a non-positive or non-finite radius, or non-finite
    /// position/velocity, are rejected.
    pub fn push_body(&mut self, body: Body) -> Result<()> {
        body.check()?;
        self.state.bodies.push(body);
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    pub fn body_count(&self) -> usize {
        self.state.bodies.len()
    }

    pub fn tick_count(&self) -> u64 {
        self.state.tick_count
    }

    pub fn last_spawn_time(&self) -> Option<f64> {
        self.state.last_spawn_time
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.state.kinetic_energy()
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameRecorder;
    use crate::sim::Color;
    use glam::Vec2;

    /// Spawning disabled; bodies are placed by hand
    fn scene_config(gravity: f32) -> SimConfig {
        SimConfig {
            gravity,
            max_bodies: Some(0),
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_cadence_through_steps() {
        let mut sim = Simulation::new(SimConfig::default(), 12345).unwrap();
        let spawned: Vec<bool> = [0.0, 500.0, 1001.0, 1500.0]
            .into_iter()
            .map(|t| sim.advance(t).spawned)
            .collect();
        assert_eq!(spawned, vec![true, false, true, false]);
        assert_eq!(sim.body_count(), 2);
        assert_eq!(sim.tick_count(), 4);
    }

    #[test]
    fn test_spawned_body_moves_same_tick() {
        let mut sim = Simulation::new(SimConfig::default(), 1).unwrap();
        sim.advance(0.0);
        let body = &sim.bodies()[0];
        assert_eq!(body.vel.y, 0.5);
        assert_eq!(body.pos.y, 0.5);
    }

    #[test]
    fn test_gravity_step() {
        let mut sim = Simulation::new(scene_config(0.5), 1).unwrap();
        sim.push_body(Body::new(Vec2::new(500.0, 100.0), 20.0, Color::Red)).unwrap();
        sim.advance(0.0);
        let body = &sim.bodies()[0];
        assert_eq!(body.vel, Vec2::new(0.0, 0.5));
        assert_eq!(body.pos, Vec2::new(500.0, 100.5));
    }

    #[test]
    fn test_isolated_body_without_gravity_is_unchanged() {
        let mut sim = Simulation::new(scene_config(0.0), 1).unwrap();
        let body = Body::new(Vec2::new(500.0, 300.0), 30.0, Color::Green);
        sim.push_body(body.clone()).unwrap();
        let stats = sim.advance(16.0);
        assert_eq!(sim.bodies()[0], body);
        assert_eq!(stats, StepStats::default());
    }

    #[test]
    fn test_head_on_pair_through_step() {
        let mut sim = Simulation::new(scene_config(0.0), 1).unwrap();
        sim.push_body(
            Body::new(Vec2::new(495.0, 300.0), 20.0, Color::Red).with_velocity(Vec2::new(5.0, 0.0)),
        ).unwrap();
        sim.push_body(
            Body::new(Vec2::new(539.0, 300.0), 20.0, Color::Blue)
                .with_velocity(Vec2::new(-5.0, 0.0)),
        ).unwrap();
        let stats = sim.advance(0.0);
        assert_eq!(stats.contacts, 1);
        let bodies = sim.bodies();
        assert!((bodies[0].vel.x + 5.0).abs() < 1e-4);
        assert!((bodies[1].vel.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_resolve_all_pairs_counts_each_pair_once() {
        let mut bodies = vec![
            Body::new(Vec2::new(100.0, 100.0), 20.0, Color::Red),
            Body::new(Vec2::new(130.0, 100.0), 20.0, Color::Green),
            Body::new(Vec2::new(115.0, 125.0), 20.0, Color::Blue),
            Body::new(Vec2::new(800.0, 100.0), 20.0, Color::Yellow),
        ];
        let contacts = resolve_all_pairs(&mut bodies, 1.0);
        assert_eq!(contacts, 3);
        assert_eq!(bodies[3].pos, Vec2::new(800.0, 100.0));
    }

    #[test]
    fn test_renderer_sees_finished_frame() {
        let mut sim = Simulation::new(SimConfig::default(), 5).unwrap();
        let mut recorder = FrameRecorder::new();
        sim.step(0.0, &mut recorder);
        sim.step(16.0, &mut recorder);

        assert_eq!(recorder.frames_seen, 2);
        assert_eq!(recorder.last_tick, 2);
        assert_eq!(recorder.last_timestamp, 16.0);
        assert_eq!(recorder.last_frame.len(), 1);
        assert_eq!(recorder.last_frame[0].y, sim.bodies()[0].pos.y);
    }

    #[test]
    fn test_push_body_rejects_degenerate_radius() {
        let mut sim = Simulation::new(scene_config(0.5), 1).unwrap();
        let bad = Body::try_new(Vec2::new(500.0, 100.0), 0.0, Color::Red);
        assert!(bad.is_err());

        let moving_nan = Body::new(Vec2::new(500.0, 100.0), 10.0, Color::Red)
            .with_velocity(Vec2::new(f32::NAN, 0.0));
        assert!(matches!(
            sim.push_body(moving_nan),
            Err(crate::Error::InvalidBody(_))
        ));
        assert_eq!(sim.body_count(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig {
            restitution: 3.0,
            ..Default::default()
        };
        assert!(Simulation::new(config, 0).is_err());
    }

    #[test]
    fn test_determinism() {
        // Same seed and timestamps give identical bodies
        let mut sim1 = Simulation::new(SimConfig::default(), 99999).unwrap();
        let mut sim2 = Simulation::new(SimConfig::default(), 99999).unwrap();

        for frame in 0..600 {
            let t = frame as f64 * 16.7;
            sim1.advance(t);
            sim2.advance(t);
        }

        assert_eq!(sim1.body_count(), sim2.body_count());
        assert_eq!(sim1.bodies(), sim2.bodies());
    }

    #[test]
    fn test_bodies_come_to_rest_inelastic() {
        let config = SimConfig {
            restitution: 0.0,
            max_bodies: Some(0),
            ..Default::default()
        };
        let mut sim = Simulation::new(config, 1).unwrap();
        sim.push_body(Body::new(Vec2::new(500.0, 0.0), 30.0, Color::Red)).unwrap();
        for frame in 0..200 {
            sim.advance(frame as f64 * 16.0);
        }
        let body = &sim.bodies()[0];
        // Gravity is re-cancelled by the floor every tick
        assert_eq!(body.pos.y, 570.0);
        assert_eq!(body.vel.y, 0.0);
    }
}
