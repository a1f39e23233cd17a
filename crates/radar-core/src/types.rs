// File: crates/radar-core/src/types.rs
// Summary: Shared types and constants (surface sizing, strokes, text styles).

use skia_safe as skia;

/// Fallback display dimension when the host has not laid the surface out yet.
pub const DEFAULT_DISPLAY_SIZE: f64 = 400.0;
/// Display sizes below this are treated as a transient layout and ignored by `resize`.
pub const MIN_SURFACE_SIZE: f64 = 10.0;
/// Space reserved around the grid for label text, in logical pixels.
pub const LABEL_TEXT_PADDING: f64 = 90.0;
/// Floor for the usable grid radius.
pub const MIN_USABLE_RADIUS: f64 = 50.0;

/// Grid rings and spokes are always hairlines.
pub const GRID_LINE_WIDTH: f64 = 1.0;
/// Outline drawn around every point marker.
pub const POINT_BORDER_COLOR: skia::Color = skia::Color::WHITE;
pub const POINT_BORDER_WIDTH: f64 = 1.0;

/// Display box reported by a surface, in logical pixels.
/// A `None` dimension means the host layout has not produced one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayBox {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl DisplayBox {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width: Some(width), height: Some(height) }
    }

    /// Square side used for layout: the smaller dimension, with unusable
    /// dimensions (missing, zero, non-finite) replaced by [`DEFAULT_DISPLAY_SIZE`].
    pub fn square_side(&self) -> f64 {
        let usable = |v: Option<f64>| match v {
            Some(v) if v.is_finite() && v != 0.0 => v,
            _ => DEFAULT_DISPLAY_SIZE,
        };
        usable(self.width).min(usable(self.height))
    }
}

/// Stroke settings for outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: skia::Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Horizontal text anchoring relative to the label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Text starts at the anchor and grows rightwards.
    Left,
    Center,
    /// Text ends at the anchor and grows leftwards.
    Right,
}

/// Style for a single text run. The baseline is always vertically centered
/// on the anchor point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: skia::Color,
    pub align: TextAlign,
}
