//! JSON-lines frame dump
//!
//! Stands in for a canvas: each frame becomes one JSON object on its own line,
//! e.g. `{"tick":3,"timestamp":50.0,"width":1000.0,"height":600.0,"bodies":[...]}`.

use std::io::Write;

use serde::Serialize;

use super::{Frame, Renderer};
use crate::sim::BodyView;

#[derive(Serialize)]
struct FrameRecord<'a> {
    tick: u64,
    timestamp: f64,
    width: f32,
    height: f32,
    bodies: &'a [BodyView],
}

/// Writes one JSON document per frame
///
/// Write failures are logged once and then swallowed; drawing must never
/// interrupt the simulation. Check [`JsonLinesRenderer::failed`] afterwards.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    views: Vec<BodyView>,
    failed: bool,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            views: Vec::new(),
            failed: false,
        }
    }

    /// True if any frame failed to write
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame<'_>) -> crate::Result<()> {
        self.views.clear();
        self.views.extend(frame.bodies.iter().map(|b| b.view()));
        let record = FrameRecord {
            tick: frame.tick,
            timestamp: frame.timestamp,
            width: frame.arena.width,
            height: frame.arena.height,
            bodies: &self.views,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) {
        if self.failed {
            return;
        }
        if let Err(e) = self.write_frame(frame) {
            log::warn!("Frame {} not written: {e}", frame.tick);
            self.failed = true;
        }
    }
}
