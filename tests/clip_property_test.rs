//! Clipper property tests.
//!
//! The tolerances exercised here (0.5 px for rectangles, squared length 1 for
//! polygons) are tuning knobs. Assertions about clipped endpoints therefore
//! hold within those knobs, not exactly.
//!
//! Run: cargo test --test clip_property_test

#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use raster_clip::clip::{clip, clip_all, clip_polygon, clip_rect, clip_with, Boundary, ClipConfig, RectClipConfig};
use raster_clip::geometry::{Point, Polygon, Rect, Segment};
use raster_clip::Error;

const TOLERANCE: f64 = 0.5;

fn unit_window() -> Rect {
    Rect::new(Point::new(-1.0, -1.0), Point::new(1.0, 1.0)).unwrap()
}

fn wide_window() -> Rect {
    Rect::new(Point::new(-10.0, -5.0), Point::new(10.0, 5.0)).unwrap()
}

fn square() -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ])
    .unwrap()
}

fn within_expanded(p: Point, rect: &Rect, by: f64) -> bool {
    p.x >= rect.min.x - by && p.x <= rect.max.x + by && p.y >= rect.min.y - by && p.y <= rect.max.y + by
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn horizontal_line_through_unit_window() {
    let out = clip(Segment::from_coords(-10.0, 0.0, 10.0, 0.0), &Boundary::Rect(unit_window())).unwrap();

    assert_eq!(out.len(), 1);
    assert_abs_diff_eq!(out[0].p1.x, -1.0, epsilon = TOLERANCE);
    assert_abs_diff_eq!(out[0].p2.x, 1.0, epsilon = TOLERANCE);
    assert_abs_diff_eq!(out[0].p1.y, 0.0);
    assert_abs_diff_eq!(out[0].p2.y, 0.0);
}

#[test]
fn clip_result_keeps_input_direction() {
    let out = clip(Segment::from_coords(10.0, 0.0, -10.0, 0.0), &Boundary::Rect(unit_window())).unwrap();
    assert_eq!(out.len(), 1);
    assert!(out[0].p1.x > out[0].p2.x);
}

#[test]
fn second_clip_stays_within_tolerance_of_first() {
    let rect = unit_window();
    let config = RectClipConfig::default();
    for seg in [
        Segment::from_coords(-10.0, 0.0, 10.0, 0.0),
        Segment::from_coords(-3.0, -2.0, 4.0, 1.5),
        Segment::from_coords(0.2, -5.0, 0.7, 5.0),
        Segment::from_coords(-100.0, -100.0, 100.0, 100.0),
    ] {
        let first = clip_rect(seg, &rect, &config);
        for piece in &first {
            let second = clip_rect(*piece, &rect, &config);
            assert_eq!(second.len(), 1, "{piece:?}");
            assert_abs_diff_eq!(second[0].p1.x, piece.p1.x, epsilon = TOLERANCE);
            assert_abs_diff_eq!(second[0].p1.y, piece.p1.y, epsilon = TOLERANCE);
            assert_abs_diff_eq!(second[0].p2.x, piece.p2.x, epsilon = TOLERANCE);
            assert_abs_diff_eq!(second[0].p2.y, piece.p2.y, epsilon = TOLERANCE);
        }
    }
}

#[test]
fn horizontal_clip_is_exactly_stable() {
    let rect = unit_window();
    let config = RectClipConfig::default();
    let first = clip_rect(Segment::from_coords(-10.0, 0.0, 10.0, 0.0), &rect, &config);
    let second: Vec<Segment> = first.iter().flat_map(|s| clip_rect(*s, &rect, &config)).collect();
    assert_eq!(first, second);
}

#[test]
fn polygon_crossing_square() {
    let out = clip(Segment::from_coords(-5.0, 5.0, 15.0, 5.0), &Boundary::Polygon(square())).unwrap();
    assert_eq!(out.len(), 1);
    assert_abs_diff_eq!(out[0].p1.x, 0.0, epsilon = 1.0);
    assert_abs_diff_eq!(out[0].p2.x, 10.0, epsilon = 1.0);
}

#[test]
fn inscribed_pentagon_clips_diameter() {
    let window = Rect::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0)).unwrap();
    let pentagon = Polygon::inscribed(&window, 5).unwrap();
    let out = clip(Segment::from_coords(-50.0, 50.0, 150.0, 50.0), &Boundary::Polygon(pentagon.clone())).unwrap();

    assert_eq!(out.len(), 1);
    assert!(pentagon.contains(out[0].midpoint()));
    assert!(out[0].p1.x > 0.0 && out[0].p2.x < 100.0);
}

#[test]
fn tighter_tolerance_tightens_result() {
    let config = ClipConfig { rect: RectClipConfig::default().with_tolerance(0.01).with_max_depth(30), ..ClipConfig::default() };
    let out = clip_with(Segment::from_coords(-10.0, 0.0, 10.0, 0.0), &Boundary::Rect(unit_window()), &config).unwrap();

    assert_eq!(out.len(), 1);
    assert_abs_diff_eq!(out[0].p1.x, -1.0, epsilon = 0.01);
    assert_abs_diff_eq!(out[0].p2.x, 1.0, epsilon = 0.01);
}

#[test]
fn non_finite_segment_is_rejected() {
    let err = clip(Segment::from_coords(f64::INFINITY, 0.0, 1.0, 1.0), &Boundary::Polygon(square())).unwrap_err();
    assert!(matches!(err, Error::NonFiniteCoordinate { .. }));
}

#[test]
fn clip_all_matches_single_calls() {
    let boundary = Boundary::Rect(wide_window());
    let segments: Vec<Segment> = (0..32)
        .map(|i| {
            let t = f64::from(i);
            Segment::from_coords(-20.0 + t, -8.0 + t * 0.5, 15.0 - t, 6.0 - t * 0.25)
        })
        .collect();

    let batch = clip_all(&segments, &boundary, &ClipConfig::default()).unwrap();
    for (seg, pieces) in segments.iter().zip(&batch) {
        assert_eq!(pieces, &clip(*seg, &boundary).unwrap());
    }
}

// ============================================================================
// Rectangle properties
// ============================================================================

proptest! {
    #[test]
    fn rect_inside_segment_unchanged(x1 in -10.0f64..=10.0, y1 in -5.0f64..=5.0, x2 in -10.0f64..=10.0, y2 in -5.0f64..=5.0) {
        let seg = Segment::from_coords(x1, y1, x2, y2);
        prop_assert_eq!(clip_rect(seg, &wide_window(), &RectClipConfig::default()), vec![seg]);
    }

    #[test]
    fn rect_shared_half_plane_empty(x1 in 10.001f64..100.0, y1 in -100.0f64..100.0, x2 in 10.001f64..100.0, y2 in -100.0f64..100.0) {
        let seg = Segment::from_coords(x1, y1, x2, y2);
        prop_assert!(clip_rect(seg, &wide_window(), &RectClipConfig::default()).is_empty());
        // Mirror onto the bottom half-plane as well.
        let below = Segment::from_coords(y1 * 0.1, -x1, y2 * 0.1, -x2);
        prop_assert!(clip_rect(below, &wide_window(), &RectClipConfig::default()).is_empty());
    }

    #[test]
    fn rect_output_within_tolerance_of_window(x1 in -100.0f64..100.0, y1 in -100.0f64..100.0, x2 in -100.0f64..100.0, y2 in -100.0f64..100.0) {
        let rect = wide_window();
        for piece in clip_rect(Segment::from_coords(x1, y1, x2, y2), &rect, &RectClipConfig::default()) {
            prop_assert!(within_expanded(piece.p1, &rect, TOLERANCE), "{:?}", piece);
            prop_assert!(within_expanded(piece.p2, &rect, TOLERANCE), "{:?}", piece);
        }
    }
}

// ============================================================================
// Polygon properties
// ============================================================================

proptest! {
    #[test]
    fn polygon_inside_segment_unchanged(x1 in 0.0f64..=10.0, y1 in 0.0f64..=10.0, x2 in 0.0f64..=10.0, y2 in 0.0f64..=10.0) {
        let seg = Segment::from_coords(x1, y1, x2, y2);
        prop_assert_eq!(clip_polygon(seg, &square(), &Default::default()), vec![seg]);
    }

    #[test]
    fn polygon_one_edge_outside_empty(x1 in -100.0f64..-0.001, y1 in -100.0f64..100.0, x2 in -100.0f64..-0.001, y2 in -100.0f64..100.0) {
        let seg = Segment::from_coords(x1, y1, x2, y2);
        prop_assert!(clip_polygon(seg, &square(), &Default::default()).is_empty());
    }

    #[test]
    fn polygon_winding_does_not_matter(x1 in -20.0f64..30.0, y1 in -20.0f64..30.0, x2 in -20.0f64..30.0, y2 in -20.0f64..30.0) {
        let ccw = square();
        let cw = Polygon::new(ccw.vertices().iter().rev().copied().collect()).unwrap();
        let seg = Segment::from_coords(x1, y1, x2, y2);
        prop_assert_eq!(clip_polygon(seg, &ccw, &Default::default()), clip_polygon(seg, &cw, &Default::default()));
    }
}
