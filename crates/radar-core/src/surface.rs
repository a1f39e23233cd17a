// File: crates/radar-core/src/surface.rs
// Summary: Drawing-surface contract and the surface layout state (size, DPR, usable radius).

use crate::geometry::{Point, Polyline};
use crate::types::{DisplayBox, Stroke, TextStyle, LABEL_TEXT_PADDING, MIN_SURFACE_SIZE, MIN_USABLE_RADIUS};
use skia_safe as skia;

/// Drawing surface the renderer paints onto.
///
/// Coordinates passed to the drawing calls are in whatever space the last
/// [`DrawSurface::reset_transform`] established; the renderer always resets to
/// a uniform device-pixel-ratio scale so it can work in logical pixels.
pub trait DrawSurface {
    /// Current display box in logical pixels.
    fn display_box(&self) -> DisplayBox;

    fn device_pixel_ratio(&self) -> f64;

    /// Resize the backing store in physical pixels. Discards prior content.
    fn set_backing_size(&mut self, width: u32, height: u32);

    /// Drop any accumulated transform and apply a uniform scale.
    fn reset_transform(&mut self, scale: f64);

    /// Clear a rectangle to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn stroke_path(&mut self, path: &Polyline, stroke: Stroke);

    fn fill_path(&mut self, path: &Polyline, color: skia::Color);

    fn fill_circle(&mut self, center: Point, radius: f64, color: skia::Color);

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke);

    /// Draw `text` anchored at `at` (horizontal anchoring from `style.align`,
    /// vertical middle).
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);
}

/// Layout derived from the surface's display box and pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    pub device_pixel_ratio: f64,
    /// Square side in logical pixels.
    pub size: f64,
    pub center: Point,
    /// Largest grid radius that still leaves room for labels.
    pub max_usable_radius: f64,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            size: 0.0,
            center: Point::default(),
            max_usable_radius: MIN_USABLE_RADIUS,
        }
    }
}

impl SurfaceState {
    /// Compute the layout for a display box, or `None` when the box is too
    /// small to be a settled layout.
    pub fn measure(display: DisplayBox, device_pixel_ratio: f64) -> Option<Self> {
        let size = display.square_side();
        if size < MIN_SURFACE_SIZE {
            return None;
        }
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Some(Self {
            device_pixel_ratio: dpr,
            size,
            center: Point::new(size / 2.0, size / 2.0),
            max_usable_radius: (size / 2.0 - LABEL_TEXT_PADDING).max(MIN_USABLE_RADIUS),
        })
    }

    /// Backing-store side in physical pixels.
    pub fn backing_side(&self) -> u32 {
        (self.size * self.device_pixel_ratio).round() as u32
    }
}
