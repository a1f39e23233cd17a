// File: crates/radar-core/tests/geometry.rs
// Purpose: Radius scaling, axis angles, ring shape and data-vertex linearity.

use radar_core::geometry::{angle_at, data_vertex, grid_ring, ring_radius, scaled_radar_radius, spoke};
use radar_core::Point;
use std::f64::consts::PI;

const EPS: f64 = 1e-9;

#[test]
fn scaled_radius_hits_domain_endpoints() {
    let r = 110.0;
    assert!((scaled_radar_radius(60.0, r) - 0.4 * r).abs() < EPS);
    assert!((scaled_radar_radius(150.0, r) - 0.85 * r).abs() < EPS);
    // Default control of 120 sits two thirds of the way: 0.4 + 0.3
    assert!((scaled_radar_radius(120.0, r) - 0.7 * r).abs() < EPS);
}

#[test]
fn scaled_radius_is_monotonic_over_domain() {
    let mut prev = f64::NEG_INFINITY;
    for step in 0..=90 {
        let v = scaled_radar_radius(60.0 + step as f64, 200.0);
        assert!(v > prev, "not increasing at {}", 60 + step);
        prev = v;
    }
}

#[test]
fn scaled_radius_extrapolates_outside_domain() {
    let r = 100.0;
    // 30 is a third of the span below 60: 0.4 - 0.15
    assert!((scaled_radar_radius(30.0, r) - 25.0).abs() < EPS);
    // 195 is half a span above 150: 0.85 + 0.225
    assert!((scaled_radar_radius(195.0, r) - 107.5).abs() < EPS);
}

#[test]
fn angles_start_at_top_and_run_clockwise() {
    let deg: Vec<f64> = (0..4).map(|i| angle_at(i, 4).to_degrees()).collect();
    for (got, want) in deg.iter().zip([-90.0, 0.0, 90.0, 180.0]) {
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
    }
    assert!((angle_at(1, 3) - (-PI / 2.0 + 2.0 * PI / 3.0)).abs() < EPS);
}

#[test]
fn grid_ring_closes_back_to_start() {
    let center = Point::new(100.0, 100.0);
    for n in 1..=7 {
        let ring = grid_ring(center, 40.0, n);
        assert!(ring.closed);
        assert_eq!(ring.points.len(), n + 1);
        assert_eq!(ring.points.first(), ring.points.last());
        for p in &ring.points {
            assert!((p.distance_to(center) - 40.0).abs() < 1e-9);
        }
    }
}

#[test]
fn ring_radii_divide_scaled_radius_evenly() {
    let radii: Vec<f64> = (1..=5).map(|l| ring_radius(77.0, l, 5)).collect();
    let want = [15.4, 30.8, 46.2, 61.6, 77.0];
    for (got, want) in radii.iter().zip(want) {
        assert!((got - want).abs() < 1e-9);
    }
}

#[test]
fn spoke_runs_from_center_to_rim() {
    let center = Point::new(200.0, 200.0);
    let s = spoke(center, 77.0, 1, 4);
    assert!(!s.closed);
    assert_eq!(s.points.len(), 2);
    assert_eq!(s.points[0], center);
    assert!((s.points[1].x - 277.0).abs() < EPS);
    assert!((s.points[1].y - 200.0).abs() < EPS);
}

#[test]
fn vertex_distance_is_linear_in_value() {
    let center = Point::new(0.0, 0.0);
    for i in 0..5 {
        let one = data_vertex(center, 80.0, 3.0, 10.0, i, 5).distance_to(center);
        let two = data_vertex(center, 80.0, 6.0, 10.0, i, 5).distance_to(center);
        assert!((two - 2.0 * one).abs() < 1e-9);
    }
}

#[test]
fn vertex_is_not_clamped() {
    let center = Point::new(0.0, 0.0);
    // Above the maximum overshoots the outer ring
    let over = data_vertex(center, 50.0, 15.0, 10.0, 1, 4);
    assert!((over.x - 75.0).abs() < EPS);
    // Negative values flip through the center
    let neg = data_vertex(center, 50.0, -5.0, 10.0, 1, 4);
    assert!((neg.x + 25.0).abs() < EPS);
}
