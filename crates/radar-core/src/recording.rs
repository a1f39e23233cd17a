// File: crates/radar-core/src/recording.rs
// Summary: Headless surface that records every drawing call; used by tests, benches and op-forwarding hosts.

use skia_safe as skia;

use crate::geometry::{Point, Polyline};
use crate::surface::DrawSurface;
use crate::types::{DisplayBox, Stroke, TextStyle};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    SetBackingSize { width: u32, height: u32 },
    ResetTransform { scale: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    StrokePath { path: Polyline, stroke: Stroke },
    FillPath { path: Polyline, color: skia::Color },
    FillCircle { center: Point, radius: f64, color: skia::Color },
    StrokeCircle { center: Point, radius: f64, stroke: Stroke },
    FillText { text: String, at: Point, style: TextStyle },
}

/// Surface with a host-controlled display box and pixel ratio that keeps a
/// log of drawing calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    display: DisplayBox,
    dpr: f64,
    backing: (u32, u32),
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self { display: DisplayBox::new(width, height), dpr, backing: (0, 0), ops: Vec::new() }
    }

    /// Simulate a host layout change; takes effect on the chart's next `resize`.
    pub fn set_display_box(&mut self, display: DisplayBox) {
        self.display = display;
    }

    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.dpr = dpr;
    }

    /// Backing-store size in physical pixels, `(0, 0)` until first set.
    pub fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drain the log.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl DrawSurface for RecordingSurface {
    fn display_box(&self) -> DisplayBox {
        self.display
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.ops.push(DrawOp::SetBackingSize { width, height });
    }

    fn reset_transform(&mut self, scale: f64) {
        self.ops.push(DrawOp::ResetTransform { scale });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::ClearRect { x, y, width, height });
    }

    fn stroke_path(&mut self, path: &Polyline, stroke: Stroke) {
        self.ops.push(DrawOp::StrokePath { path: path.clone(), stroke });
    }

    fn fill_path(&mut self, path: &Polyline, color: skia::Color) {
        self.ops.push(DrawOp::FillPath { path: path.clone(), color });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: skia::Color) {
        self.ops.push(DrawOp::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        self.ops.push(DrawOp::StrokeCircle { center, radius, stroke });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(DrawOp::FillText { text: text.to_string(), at, style: *style });
    }
}
