// File: crates/radar-core/tests/common/mod.rs
// Purpose: Shared builders and op filters for the recording-surface tests.
#![allow(dead_code)]

use radar_core::{ChartConfig, DrawOp, Polyline, RadarChart, RecordingSurface};

/// Chart on a 400x400 recording surface at dpr 1, with the construction log drained.
pub fn chart(labels: &[&str], data: &[f64]) -> RadarChart<RecordingSurface> {
    chart_on(RecordingSurface::new(400.0, 400.0, 1.0), labels, data)
}

pub fn chart_on(surface: RecordingSurface, labels: &[&str], data: &[f64]) -> RadarChart<RecordingSurface> {
    let config = ChartConfig {
        labels: labels.iter().map(|s| s.to_string()).collect(),
        data: data.to_vec(),
        ..ChartConfig::default()
    };
    let mut chart = RadarChart::new(surface, config);
    chart.surface_mut().take_ops();
    chart
}

/// Draw once and return exactly the ops of that pass.
pub fn draw_ops(chart: &mut RadarChart<RecordingSurface>) -> Vec<DrawOp> {
    chart.surface_mut().take_ops();
    chart.draw();
    chart.surface_mut().take_ops()
}

/// Closed strokes in the grid color: the rings.
pub fn rings(chart: &RadarChart<RecordingSurface>, ops: &[DrawOp]) -> Vec<Polyline> {
    let grid = chart.config().grid_color;
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::StrokePath { path, stroke } if path.closed && stroke.color == grid => Some(path.clone()),
            _ => None,
        })
        .collect()
}

/// Open strokes in the grid color: the spokes.
pub fn spokes(chart: &RadarChart<RecordingSurface>, ops: &[DrawOp]) -> Vec<Polyline> {
    let grid = chart.config().grid_color;
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::StrokePath { path, stroke } if !path.closed && stroke.color == grid => Some(path.clone()),
            _ => None,
        })
        .collect()
}

pub fn texts(ops: &[DrawOp]) -> Vec<DrawOp> {
    ops.iter().filter(|op| matches!(op, DrawOp::FillText { .. })).cloned().collect()
}

/// Everything except label text: what the grid size is allowed to change.
pub fn geometry_ops(ops: &[DrawOp]) -> Vec<DrawOp> {
    ops.iter().filter(|op| !matches!(op, DrawOp::FillText { .. })).cloned().collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
