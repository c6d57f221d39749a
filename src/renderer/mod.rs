//! Draw-side collaborators
//!
//! The simulation hands each finished frame to a [`Renderer`]. Renderers only
//! ever see shared references, so drawing cannot feed back into physics.

pub mod json;
pub mod recorder;

pub use json::JsonLinesRenderer;
pub use recorder::FrameRecorder;

use crate::sim::{Arena, Body};

/// One fully-updated frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Steps taken so far, including this one
    pub tick: u64,
    /// Timestamp passed to the step that produced this frame
    pub timestamp: f64,
    pub arena: &'a Arena,
    /// Draw order = spawn order
    pub bodies: &'a [Body],
}

/// Receives every frame after the step completes
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Discards frames (headless runs, benchmarks)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame<'_>) {}
}
