// File: crates/radar-core/src/labels.rs
// Summary: Axis label placement on an oval locus, independent of the grid radius.

use crate::geometry::{angle_at, Point};
use crate::types::TextAlign;

/// Below this `|cos(angle)|` a label sits near the top or bottom and is centered.
pub const CENTER_ALIGN_THRESHOLD: f64 = 0.1;

/// Where and how one axis label is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub index: usize,
    pub position: Point,
    pub align: TextAlign,
}

/// Alignment that makes text grow away from the chart center.
pub fn text_align_for(angle: f64) -> TextAlign {
    let c = angle.cos();
    if c.abs() < CENTER_ALIGN_THRESHOLD {
        TextAlign::Center
    } else if c > 0.0 {
        TextAlign::Left
    } else {
        TextAlign::Right
    }
}

/// Place label `index` of `count`.
///
/// `label_width` is the horizontal radius and `label_height` the vertical
/// one; nothing else feeds into the position.
pub fn place_label(center: Point, label_width: f64, label_height: f64, index: usize, count: usize) -> LabelPlacement {
    let angle = angle_at(index, count);
    LabelPlacement {
        index,
        position: Point::new(
            center.x + angle.cos() * label_width,
            center.y + angle.sin() * label_height,
        ),
        align: text_align_for(angle),
    }
}

pub fn place_labels(center: Point, label_width: f64, label_height: f64, count: usize) -> Vec<LabelPlacement> {
    (0..count)
        .map(|i| place_label(center, label_width, label_height, i, count))
        .collect()
}
