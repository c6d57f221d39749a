//! In-memory renderer that keeps the latest frame

use super::{Frame, Renderer};
use crate::sim::BodyView;

/// Remembers what the last frame would have drawn
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub frames_seen: u64,
    pub last_tick: u64,
    pub last_timestamp: f64,
    pub last_frame: Vec<BodyView>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for FrameRecorder {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames_seen += 1;
        self.last_tick = frame.tick;
        self.last_timestamp = frame.timestamp;
        self.last_frame.clear();
        self.last_frame.extend(frame.bodies.iter().map(|b| b.view()));
    }
}
