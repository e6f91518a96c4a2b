use std::f32::consts::FRAC_PI_3;

use glam::Vec2;
use log::trace;

use crate::core::geometry::{polyline_segments, Point, Segment};

/// Number of points `koch_points` yields for `depth`: `4^depth + 1`.
pub fn point_count(depth: u32) -> usize {
    4usize.pow(depth) + 1
}

/// Points of the Koch curve from `start` to `end`.
///
/// At depth 0 this is just `[start, end]`. Every level replaces each segment
/// with four: the outer thirds stay on the line and the middle third is swapped
/// for two sides of an equilateral triangle. The apex is found by rotating the
/// segment direction by -60 degrees, which in y-down screen space puts it to the
/// left of the direction of travel.
///
/// Shared vertices between sub-curves appear once, so the first point is
/// exactly `start`, the last is exactly `end`, and there are `4^depth + 1`
/// points in total.
pub fn koch_points(start: Point, end: Point, depth: u32) -> Vec<Point> {
    let mut points = Vec::with_capacity(point_count(depth));
    points.push(start);
    extend_koch(&mut points, start, end, depth);
    trace!("koch depth {} produced {} points", depth, points.len());
    points
}

/// Segments of the Koch curve from `start` to `end`, `4^depth` of them.
pub fn koch_segments(start: Point, end: Point, depth: u32) -> Vec<Segment> {
    polyline_segments(&koch_points(start, end, depth)).collect()
}

// Appends everything after `start`; the caller has already pushed it.
fn extend_koch(points: &mut Vec<Point>, start: Point, end: Point, depth: u32) {
    if depth == 0 {
        points.push(end);
        return;
    }

    let delta = end - start;
    let one_third = start + delta / 3.0;
    let two_thirds = start + 2.0 * delta / 3.0;

    let angle = delta.y.atan2(delta.x) - FRAC_PI_3;
    let length = delta.length() / 3.0;
    let peak = one_third + Vec2::from_angle(angle) * length;

    extend_koch(points, start, one_third, depth - 1);
    extend_koch(points, one_third, peak, depth - 1);
    extend_koch(points, peak, two_thirds, depth - 1);
    extend_koch(points, two_thirds, end, depth - 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn sample_segments() -> Vec<(Point, Point)> {
        vec![
            (Vec2::new(0.0, 0.0), Vec2::new(300.0, 0.0)),
            (Vec2::new(400.0, 233.0), Vec2::new(650.0, 666.0)),
            (Vec2::new(650.0, 666.0), Vec2::new(150.0, 666.0)),
            (Vec2::new(-12.5, 7.25), Vec2::new(3.0, -99.0)),
        ]
    }

    #[test]
    fn length_is_four_to_the_depth_plus_one() {
        for (a, b) in sample_segments() {
            for depth in 0..=5 {
                let points = koch_points(a, b, depth);
                assert_eq!(points.len(), 4usize.pow(depth) + 1, "depth {}", depth);
                assert_eq!(points.len(), point_count(depth));
            }
        }
    }

    #[test]
    fn depth_zero_is_the_segment_itself() {
        for (a, b) in sample_segments() {
            assert_eq!(koch_points(a, b, 0), vec![a, b]);
        }
    }

    #[test]
    fn endpoints_are_preserved_exactly() {
        for (a, b) in sample_segments() {
            for depth in 0..=5 {
                let points = koch_points(a, b, depth);
                assert_eq!(points.first(), Some(&a));
                assert_eq!(points.last(), Some(&b));
            }
        }
    }

    #[test]
    fn depth_one_shape() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(300.0, 0.0);
        let points = koch_points(a, b, 1);

        assert!(points[1].abs_diff_eq(Vec2::new(100.0, 0.0), EPS));
        assert!(points[3].abs_diff_eq(Vec2::new(200.0, 0.0), EPS));

        // Apex sits above the line in y-down space, at the equilateral height.
        let height = 100.0 * 3f32.sqrt() / 2.0;
        assert!(points[2].abs_diff_eq(Vec2::new(150.0, -height), EPS));
    }

    #[test]
    fn every_segment_has_equal_length() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(280.0, 140.0);
        let full = a.distance(b);

        for depth in 0..=4 {
            let expected = full / 3f32.powi(depth as i32);
            for seg in koch_segments(a, b, depth) {
                assert!(
                    (seg.start.distance(seg.end) - expected).abs() < 1e-2,
                    "depth {}: {} vs {}",
                    depth,
                    seg.start.distance(seg.end),
                    expected
                );
            }
        }
    }

    #[test]
    fn segments_chain_end_to_start() {
        let segs = koch_segments(Vec2::ZERO, Vec2::new(90.0, 0.0), 3);
        assert_eq!(segs.len(), 64);
        for pair in segs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn is_deterministic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(500.0, -30.0);
        assert_eq!(koch_points(a, b, 4), koch_points(a, b, 4));
    }
}
