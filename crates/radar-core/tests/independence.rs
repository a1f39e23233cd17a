// File: crates/radar-core/tests/independence.rs
// Purpose: Grid size, label radii and label font size never affect each other's geometry.

mod common;

use common::{draw_ops, geometry_ops, texts};
use radar_core::DrawOp;

const LABELS: [&str; 6] = ["Speed", "Power", "Range", "Armor", "Agility", "Stealth"];
const DATA: [f64; 6] = [7.5, 9.0, 4.0, 6.5, 8.0, 3.0];

/// Label anchors and alignments without the style, which the font size may change.
fn anchors(ops: &[DrawOp]) -> Vec<DrawOp> {
    texts(ops)
        .into_iter()
        .map(|op| match op {
            DrawOp::FillText { text, at, mut style } => {
                style.font_size = 0.0;
                DrawOp::FillText { text, at, style }
            }
            other => other,
        })
        .collect()
}

#[test]
fn radar_radius_leaves_labels_untouched() {
    let mut chart = common::chart(&LABELS, &DATA);
    let placements = chart.label_placements();
    let before = draw_ops(&mut chart);

    for v in [40.0, 60.0, 95.5, 150.0, 300.0] {
        chart.set_radar_radius(v);
        let after = chart.surface_mut().take_ops();
        assert_eq!(chart.label_placements(), placements);
        assert_eq!(texts(&after), texts(&before), "labels moved at radar radius {v}");
        assert_ne!(geometry_ops(&after), geometry_ops(&before), "grid did not follow radar radius {v}");
    }
}

#[test]
fn label_controls_leave_grid_and_polygon_untouched() {
    let mut chart = common::chart(&LABELS, &DATA);
    let scaled = chart.scaled_radar_radius();
    let vertices = chart.data_vertices();
    let before = geometry_ops(&draw_ops(&mut chart));

    chart.set_label_height(60.0);
    assert_eq!(geometry_ops(&chart.surface_mut().take_ops()), before);
    chart.set_label_width(250.0);
    assert_eq!(geometry_ops(&chart.surface_mut().take_ops()), before);
    chart.set_label_font_size(22.0);
    assert_eq!(geometry_ops(&chart.surface_mut().take_ops()), before);

    assert_eq!(chart.scaled_radar_radius(), scaled);
    assert_eq!(chart.data_vertices(), vertices);
}

#[test]
fn font_size_leaves_label_positions_untouched() {
    let mut chart = common::chart(&LABELS, &DATA);
    let before = anchors(&draw_ops(&mut chart));
    chart.set_label_font_size(30.0);
    let after = anchors(&chart.surface_mut().take_ops());
    assert_eq!(after, before);
}

#[test]
fn label_radii_leave_each_other_alone() {
    let mut chart = common::chart(&LABELS, &DATA);
    let xs: Vec<f64> = chart.label_placements().iter().map(|p| p.position.x).collect();
    chart.set_label_height(40.0);
    let xs_after: Vec<f64> = chart.label_placements().iter().map(|p| p.position.x).collect();
    assert_eq!(xs, xs_after);

    let ys: Vec<f64> = chart.label_placements().iter().map(|p| p.position.y).collect();
    chart.set_label_width(10.0);
    let ys_after: Vec<f64> = chart.label_placements().iter().map(|p| p.position.y).collect();
    assert_eq!(ys, ys_after);
}
