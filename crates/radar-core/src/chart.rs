// File: crates/radar-core/src/chart.rs
// Summary: RadarChart renderer: surface layout, setters and the ordered paint pipeline.

use tracing::debug;

use crate::config::ChartConfig;
use crate::geometry::{self, Point, Polyline};
use crate::labels::{self, LabelPlacement};
use crate::surface::{DrawSurface, SurfaceState};
use crate::types::{Stroke, TextStyle, GRID_LINE_WIDTH, POINT_BORDER_COLOR, POINT_BORDER_WIDTH};

/// Radar chart bound to one drawing surface.
///
/// Every setter replaces a single field and repaints the whole chart. The
/// host calls [`RadarChart::resize`] whenever its layout changes; the chart
/// never observes layout on its own.
pub struct RadarChart<S: DrawSurface> {
    surface: S,
    config: ChartConfig,
    state: SurfaceState,
}

impl<S: DrawSurface> RadarChart<S> {
    /// Take ownership of `surface` and lay it out once.
    pub fn new(surface: S, config: ChartConfig) -> Self {
        let mut chart = Self { surface, config, state: SurfaceState::default() };
        chart.resize();
        chart
    }

    /// Recompute layout from the surface's current display box.
    ///
    /// A display box under 10px is treated as an unsettled layout and leaves
    /// the previous state untouched.
    pub fn resize(&mut self) {
        let display_box = self.surface.display_box();
        let Some(state) = SurfaceState::measure(display_box, self.surface.device_pixel_ratio()) else {
            debug!(display = ?display_box, "resize skipped: surface too small");
            return;
        };
        let side = state.backing_side();
        self.surface.set_backing_size(side, side);
        debug!(size = state.size, dpr = state.device_pixel_ratio, backing = side, "surface resized");
        self.state = state;
    }

    pub fn set_data(&mut self, data: Vec<f64>) {
        self.config.data = data;
        self.draw();
    }

    pub fn set_label_height(&mut self, value: f64) {
        self.config.label_height = value;
        self.draw();
    }

    pub fn set_label_width(&mut self, value: f64) {
        self.config.label_width = value;
        self.draw();
    }

    pub fn set_label_font_size(&mut self, value: f64) {
        self.config.label_font_size = value;
        self.draw();
    }

    pub fn set_radar_radius(&mut self, value: f64) {
        self.config.radar_radius = value;
        self.draw();
    }

    /// Repaint everything: grid, spokes, data polygon with points, labels.
    /// Does nothing when there are no labels.
    pub fn draw(&mut self) {
        let n = self.config.point_count();
        if n == 0 {
            return;
        }

        self.surface.reset_transform(self.state.device_pixel_ratio);
        self.surface.clear_rect(0.0, 0.0, self.state.size, self.state.size);

        let scaled = self.scaled_radar_radius();
        draw_grid(&mut self.surface, &self.config, self.state.center, scaled, n);
        draw_spokes(&mut self.surface, &self.config, self.state.center, scaled, n);
        if !self.config.data.is_empty() {
            let vertices = self.data_vertices();
            draw_data_polygon(&mut self.surface, &self.config, &vertices);
        }
        let placements = self.label_placements();
        draw_labels(&mut self.surface, &self.config, &placements);
        debug!(points = n, scaled_radius = scaled, "radar drawn");
    }

    /// Grid radius in logical pixels for the current `radar_radius` and layout.
    pub fn scaled_radar_radius(&self) -> f64 {
        geometry::scaled_radar_radius(self.config.radar_radius, self.state.max_usable_radius)
    }

    /// Label anchors for the current configuration.
    pub fn label_placements(&self) -> Vec<LabelPlacement> {
        labels::place_labels(
            self.state.center,
            self.config.label_width,
            self.config.label_height,
            self.config.point_count(),
        )
    }

    /// Data polygon vertices, one per label.
    pub fn data_vertices(&self) -> Vec<Point> {
        let n = self.config.point_count();
        let scaled = self.scaled_radar_radius();
        (0..n)
            .map(|i| {
                geometry::data_vertex(self.state.center, scaled, self.config.value_at(i), self.config.max_value, i, n)
            })
            .collect()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn surface_state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for the host, e.g. to update the display box before `resize`.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

// ---- paint stages -----------------------------------------------------------

fn draw_grid<S: DrawSurface>(surface: &mut S, cfg: &ChartConfig, center: Point, scaled: f64, n: usize) {
    let stroke = Stroke::new(cfg.grid_color, GRID_LINE_WIDTH);
    for level in 1..=cfg.grid_levels {
        let r = geometry::ring_radius(scaled, level, cfg.grid_levels);
        surface.stroke_path(&geometry::grid_ring(center, r, n), stroke);
    }
}

fn draw_spokes<S: DrawSurface>(surface: &mut S, cfg: &ChartConfig, center: Point, scaled: f64, n: usize) {
    let stroke = Stroke::new(cfg.grid_color, GRID_LINE_WIDTH);
    for i in 0..n {
        surface.stroke_path(&geometry::spoke(center, scaled, i, n), stroke);
    }
}

fn draw_data_polygon<S: DrawSurface>(surface: &mut S, cfg: &ChartConfig, vertices: &[Point]) {
    let polygon = Polyline::closed(vertices.to_vec());
    surface.fill_path(&polygon, cfg.fill_color);
    surface.stroke_path(&polygon, Stroke::new(cfg.line_color, cfg.line_width));

    let border = Stroke::new(POINT_BORDER_COLOR, POINT_BORDER_WIDTH);
    for (i, &p) in vertices.iter().enumerate() {
        surface.fill_circle(p, cfg.point_radius, cfg.point_color(i));
        surface.stroke_circle(p, cfg.point_radius, border);
    }
}

fn draw_labels<S: DrawSurface>(surface: &mut S, cfg: &ChartConfig, placements: &[LabelPlacement]) {
    for p in placements {
        let style = TextStyle { font_size: cfg.label_font_size, color: cfg.label_color, align: p.align };
        surface.fill_text(cfg.label_at(p.index), p.position, &style);
    }
}
