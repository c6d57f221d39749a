//! Tick sources
//!
//! The simulation never schedules itself. Something outside calls
//! [`Simulation::step`] once per frame with a timestamp in milliseconds; this
//! module provides the sources used natively and in tests.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::renderer::Renderer;
use crate::sim::Simulation;

/// Repeatedly invokes a callback with monotonically increasing timestamps (ms)
pub trait TickSource {
    /// Run until `on_tick` returns false or the source runs dry.
    /// Returns the number of ticks delivered.
    fn run(&mut self, on_tick: &mut dyn FnMut(f64) -> bool) -> u64;
}

/// Wall-clock ticker at a target frame rate
///
/// Timestamps are milliseconds since [`TickSource::run`] started. Frames that
/// run long are not made up; the next tick just carries a larger timestamp.
#[derive(Debug, Clone)]
pub struct FixedRateTicker {
    frame: Duration,
    max_frames: Option<u64>,
}

impl FixedRateTicker {
    /// Rates that are not positive, or too slow to express as a frame
    /// `Duration`, fall back to [`TARGET_HZ`](crate::consts::TARGET_HZ)
    pub fn new(hz: f64) -> Self {
        let fallback = Duration::from_secs_f64(1.0 / crate::consts::TARGET_HZ);
        let frame = if hz.is_finite() && hz > 0.0 {
            Duration::try_from_secs_f64(1.0 / hz).unwrap_or_else(|_| {
                log::warn!("Frame rate {hz} Hz out of range, using default");
                fallback
            })
        } else {
            fallback
        };
        Self {
            frame,
            max_frames: None,
        }
    }

    /// Target time between ticks
    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Stop after this many frames
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }
}

impl TickSource for FixedRateTicker {
    fn run(&mut self, on_tick: &mut dyn FnMut(f64) -> bool) -> u64 {
        let start = Instant::now();
        let mut next = start;
        let mut ticks = 0;

        while self.max_frames.is_none_or(|max| ticks < max) {
            let now = Instant::now();
            if now < next {
                std::thread::sleep(next - now);
            }
            let timestamp = start.elapsed().as_secs_f64() * 1000.0;
            ticks += 1;
            if !on_tick(timestamp) {
                break;
            }
            next += self.frame;
            // Fell behind: resync instead of bursting
            let now = Instant::now();
            if next < now {
                next = now;
            }
        }

        ticks
    }
}

/// Replays a fixed list of timestamps (deterministic runs)
#[derive(Debug, Clone, Default)]
pub struct ScriptedTicker {
    timestamps: Vec<f64>,
}

impl ScriptedTicker {
    pub fn new(timestamps: impl Into<Vec<f64>>) -> Self {
        Self {
            timestamps: timestamps.into(),
        }
    }

    /// `frames` ticks spaced `interval_ms` apart, starting at 0
    pub fn uniform(frames: u64, interval_ms: f64) -> Self {
        Self::new(
            (0..frames)
                .map(|i| i as f64 * interval_ms)
                .collect::<Vec<_>>(),
        )
    }
}

impl TickSource for ScriptedTicker {
    fn run(&mut self, on_tick: &mut dyn FnMut(f64) -> bool) -> u64 {
        let mut ticks = 0;
        for &t in &self.timestamps {
            ticks += 1;
            if !on_tick(t) {
                break;
            }
        }
        ticks
    }
}

/// Step `sim` once per tick from `source`, drawing into `renderer`
pub fn drive<R, S, Rd>(sim: &mut Simulation<R>, source: &mut S, renderer: &mut Rd) -> u64
where
    R: Rng,
    S: TickSource + ?Sized,
    Rd: Renderer + ?Sized,
{
    source.run(&mut |t| {
        sim.step(t, &mut *renderer);
        true
    })
}
