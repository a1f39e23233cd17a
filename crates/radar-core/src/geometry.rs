// File: crates/radar-core/src/geometry.rs
// Summary: Polar geometry for grid rings, axis spokes and the data polygon.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Nominal input domain of the abstract radar-radius control.
pub const RADAR_RADIUS_MIN: f64 = 60.0;
pub const RADAR_RADIUS_MAX: f64 = 150.0;
/// Fraction of the usable radius at the bottom of the nominal domain.
pub const RADAR_FRACTION_MIN: f64 = 0.4;
/// Fraction added across the nominal domain (0.4 → 0.85).
pub const RADAR_FRACTION_SPAN: f64 = 0.45;

/// Point in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Open or closed sequence of line segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    pub fn open(points: Vec<Point>) -> Self {
        Self { points, closed: false }
    }

    pub fn closed(points: Vec<Point>) -> Self {
        Self { points, closed: true }
    }
}

/// Angle of axis `index` out of `count`: starts at the top and runs clockwise.
#[inline]
pub fn angle_at(index: usize, count: usize) -> f64 {
    -FRAC_PI_2 + index as f64 * (TAU / count as f64)
}

#[inline]
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
}

/// Map the abstract radar-radius control onto the usable radius.
///
/// The nominal domain [60, 150] maps linearly onto 40%..85% of `max_usable`.
/// Values outside the domain are not clamped: they extrapolate along the same
/// line so out-of-range sliders still scale proportionally.
pub fn scaled_radar_radius(radar_radius: f64, max_usable: f64) -> f64 {
    let t = (radar_radius - RADAR_RADIUS_MIN) / (RADAR_RADIUS_MAX - RADAR_RADIUS_MIN);
    max_usable * (RADAR_FRACTION_MIN + t * RADAR_FRACTION_SPAN)
}

/// Radius of grid ring `level` (1-based) out of `levels`.
#[inline]
pub fn ring_radius(scaled: f64, level: u32, levels: u32) -> f64 {
    scaled / f64::from(levels) * f64::from(level)
}

/// Closed ring through every axis angle. Has `count + 1` vertices, the last
/// one repeating the first.
pub fn grid_ring(center: Point, radius: f64, count: usize) -> Polyline {
    let points = (0..=count)
        .map(|i| polar(center, radius, angle_at(i % count, count)))
        .collect();
    Polyline::closed(points)
}

/// Segment from the center to the rim along axis `index`.
pub fn spoke(center: Point, scaled: f64, index: usize, count: usize) -> Polyline {
    Polyline::open(vec![center, polar(center, scaled, angle_at(index, count))])
}

/// Vertex of the data polygon for one axis.
///
/// The value is divided by `max_value` without clamping: values above the
/// maximum overshoot the outer ring and negative values flip through the center.
pub fn data_vertex(center: Point, scaled: f64, value: f64, max_value: f64, index: usize, count: usize) -> Point {
    let normalized = value / max_value;
    polar(center, normalized * scaled, angle_at(index, count))
}
