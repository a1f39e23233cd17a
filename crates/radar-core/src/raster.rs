// File: crates/radar-core/src/raster.rs
// Summary: Skia CPU raster implementation of DrawSurface with PNG export.

use skia_safe as skia;
use tracing::warn;

use crate::error::{RadarError, Result};
use crate::geometry::{Point, Polyline};
use crate::surface::DrawSurface;
use crate::text::TextShaper;
use crate::types::{DisplayBox, Stroke, TextStyle};

/// Raster surface whose backing store is sized independently of the display
/// box it reports, like a canvas element with a CSS size.
pub struct RasterSurface {
    surface: skia::Surface,
    display: DisplayBox,
    dpr: f64,
    background: Option<skia::Color>,
    shaper: TextShaper,
}

impl RasterSurface {
    /// Create a surface displayed at `width` x `height` logical pixels.
    /// The backing store starts at the matching square physical size.
    pub fn new(width: f64, height: f64, dpr: f64) -> Result<Self> {
        let display = DisplayBox::new(width, height);
        let side = ((display.square_side() * dpr.max(1.0)).round() as u32).max(1);
        Ok(Self {
            surface: allocate(side, side)?,
            display,
            dpr,
            background: None,
            shaper: TextShaper::new(),
        })
    }

    /// Paint `color` behind the chart after every clear.
    pub fn with_background(mut self, color: skia::Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn set_display_box(&mut self, display: DisplayBox) {
        self.display = display;
    }

    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.dpr = dpr;
    }

    /// Backing-store size in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (self.surface.width() as u32, self.surface.height() as u32)
    }

    /// Encode the backing store as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RadarError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the backing store as a PNG file, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl DrawSurface for RasterSurface {
    fn display_box(&self) -> DisplayBox {
        self.display
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        match allocate(width, height) {
            Ok(surface) => self.surface = surface,
            Err(err) => warn!(%err, "keeping previous backing store"),
        }
    }

    fn reset_transform(&mut self, scale: f64) {
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.scale((scale as f32, scale as f32));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let rect = skia::Rect::from_xywh(x as f32, y as f32, width as f32, height as f32);
        let canvas = self.surface.canvas();
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        canvas.draw_rect(rect, &paint);
        if let Some(bg) = self.background {
            let mut backdrop = skia::Paint::default();
            backdrop.set_color(bg);
            canvas.draw_rect(rect, &backdrop);
        }
    }

    fn stroke_path(&mut self, path: &Polyline, stroke: Stroke) {
        let canvas = self.surface.canvas();
        canvas.draw_path(&to_skia_path(path), &stroke_paint(stroke));
    }

    fn fill_path(&mut self, path: &Polyline, color: skia::Color) {
        let canvas = self.surface.canvas();
        canvas.draw_path(&to_skia_path(path), &fill_paint(color));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: skia::Color) {
        let canvas = self.surface.canvas();
        canvas.draw_circle(to_skia_point(center), radius as f32, &fill_paint(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, stroke: Stroke) {
        let canvas = self.surface.canvas();
        canvas.draw_circle(to_skia_point(center), radius as f32, &stroke_paint(stroke));
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.shaper.draw_anchored(
            canvas,
            text,
            (at.x as f32, at.y as f32),
            style.font_size as f32,
            style.color,
            style.align,
        );
    }
}

// ---- helpers ----------------------------------------------------------------

fn allocate(width: u32, height: u32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width as i32, height as i32))
        .ok_or(RadarError::SurfaceAllocation { width, height })
}

fn to_skia_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn to_skia_path(line: &Polyline) -> skia::Path {
    let points: Vec<skia::Point> = line.points.iter().copied().map(to_skia_point).collect();
    skia::Path::polygon(&points, line.closed, None, None)
}

fn stroke_paint(stroke: Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(stroke.color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}
