// File: crates/radar-core/src/lib.rs
// Summary: Core library entry point; exports the radar chart renderer, its surfaces and configuration.

pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod raster;
pub mod recording;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::RadarChart;
pub use config::{ChartConfig, RadarOptions};
pub use error::{RadarError, Result};
pub use geometry::{Point, Polyline};
pub use labels::LabelPlacement;
pub use raster::RasterSurface;
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{DrawSurface, SurfaceState};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{DisplayBox, Stroke, TextAlign, TextStyle};
