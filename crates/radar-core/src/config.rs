// File: crates/radar-core/src/config.rs
// Summary: Chart configuration with resolved defaults, plus the serde options bag it is built from.

use serde::Deserialize;
use skia_safe as skia;

use crate::color::parse_css_color;
use crate::error::Result;
use crate::theme::{self, Theme};

pub const DEFAULT_MAX_VALUE: f64 = 10.0;
pub const DEFAULT_GRID_LEVELS: u32 = 5;
pub const DEFAULT_POINT_RADIUS: f64 = 4.0;
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_LABEL_HEIGHT: f64 = 160.0;
pub const DEFAULT_LABEL_WIDTH: f64 = 120.0;
pub const DEFAULT_LABEL_FONT_SIZE: f64 = 11.0;
pub const DEFAULT_RADAR_RADIUS: f64 = 120.0;

/// Fully resolved chart configuration.
///
/// `radar_radius`, `label_height`, `label_width` and `label_font_size` each
/// drive exactly one rendering concern and never feed into one another.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Axis labels; their count is the number of axes.
    pub labels: Vec<String>,
    /// Values aligned by index with `labels`. Read through [`ChartConfig::value_at`].
    pub data: Vec<f64>,
    /// Normalization denominator. Expected to be positive; not validated.
    pub max_value: f64,
    pub line_color: skia::Color,
    pub fill_color: skia::Color,
    pub grid_color: skia::Color,
    pub label_color: skia::Color,
    /// Optional per-axis override for point marker colors.
    pub point_colors: Option<Vec<skia::Color>>,
    pub grid_levels: u32,
    pub point_radius: f64,
    pub line_width: f64,
    /// Vertical label radius in logical pixels.
    pub label_height: f64,
    /// Horizontal label radius in logical pixels.
    pub label_width: f64,
    pub label_font_size: f64,
    /// Abstract grid-size control, nominal domain [60, 150].
    pub radar_radius: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::with_theme(&Theme::neon())
    }
}

impl ChartConfig {
    /// Defaults with the colors taken from `theme`.
    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            labels: Vec::new(),
            data: Vec::new(),
            max_value: DEFAULT_MAX_VALUE,
            line_color: theme.line,
            fill_color: theme.fill,
            grid_color: theme.grid,
            label_color: theme.label,
            point_colors: None,
            grid_levels: DEFAULT_GRID_LEVELS,
            point_radius: DEFAULT_POINT_RADIUS,
            line_width: DEFAULT_LINE_WIDTH,
            label_height: DEFAULT_LABEL_HEIGHT,
            label_width: DEFAULT_LABEL_WIDTH,
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
            radar_radius: DEFAULT_RADAR_RADIUS,
        }
    }

    /// Resolve an options bag: theme colors first, then explicit options on top.
    pub fn from_options(opts: RadarOptions) -> Result<Self> {
        let theme = opts.theme.as_deref().map(theme::find).unwrap_or_default();
        let mut cfg = Self::with_theme(&theme);

        let color = |s: Option<String>, fallback: skia::Color| -> Result<skia::Color> {
            s.map_or(Ok(fallback), |s| parse_css_color(&s))
        };
        cfg.line_color = color(opts.line_color, cfg.line_color)?;
        cfg.fill_color = color(opts.fill_color, cfg.fill_color)?;
        cfg.grid_color = color(opts.grid_color, cfg.grid_color)?;
        cfg.label_color = color(opts.label_color, cfg.label_color)?;
        cfg.point_colors = opts
            .point_colors
            .map(|v| v.iter().map(|s| parse_css_color(s)).collect::<Result<Vec<_>>>())
            .transpose()?;

        cfg.labels = opts.labels.unwrap_or_default();
        cfg.data = opts.data.unwrap_or_default();
        if let Some(v) = opts.max_value { cfg.max_value = v; }
        if let Some(v) = opts.grid_levels.filter(|&v| v > 0) { cfg.grid_levels = v; }
        if let Some(v) = opts.point_radius { cfg.point_radius = v; }
        if let Some(v) = opts.line_width { cfg.line_width = v; }
        if let Some(v) = opts.label_height { cfg.label_height = v; }
        if let Some(v) = opts.label_width { cfg.label_width = v; }
        if let Some(v) = opts.label_font_size { cfg.label_font_size = v; }
        if let Some(v) = opts.radar_radius { cfg.radar_radius = v; }
        Ok(cfg)
    }

    /// Number of axes.
    pub fn point_count(&self) -> usize {
        self.labels.len()
    }

    /// Value for axis `index`; absent or NaN entries read as zero.
    pub fn value_at(&self, index: usize) -> f64 {
        match self.data.get(index) {
            Some(v) if !v.is_nan() => *v,
            _ => 0.0,
        }
    }

    /// Label text for axis `index`, empty when absent.
    pub fn label_at(&self, index: usize) -> &str {
        self.labels.get(index).map_or("", String::as_str)
    }

    /// Marker color for axis `index`: the override when present, else the line color.
    pub fn point_color(&self, index: usize) -> skia::Color {
        self.point_colors
            .as_ref()
            .and_then(|c| c.get(index))
            .copied()
            .unwrap_or(self.line_color)
    }
}

/// Loosely specified options as a host supplies them (e.g. from a TOML file).
/// Every field is optional; [`ChartConfig::from_options`] fills the rest.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarOptions {
    /// Theme preset name used as the color base.
    pub theme: Option<String>,
    pub labels: Option<Vec<String>>,
    pub data: Option<Vec<f64>>,
    pub max_value: Option<f64>,
    pub line_color: Option<String>,
    pub fill_color: Option<String>,
    pub grid_color: Option<String>,
    pub label_color: Option<String>,
    pub point_colors: Option<Vec<String>>,
    pub label_height: Option<f64>,
    pub label_width: Option<f64>,
    pub label_font_size: Option<f64>,
    pub radar_radius: Option<f64>,
    pub grid_levels: Option<u32>,
    pub point_radius: Option<f64>,
    pub line_width: Option<f64>,
}
