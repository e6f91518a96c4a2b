use glam::Vec2;

/// A point in screen space. `y` grows downward, like the framebuffer rows.
pub type Point = Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Segment { start, end }
    }
}

/// Pair up consecutive points of a polyline.
pub fn polyline_segments(points: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    points.windows(2).map(|pair| Segment::new(pair[0], pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_pairs_consecutive_points() {
        let points = [Vec2::ZERO, Vec2::X, Vec2::ONE];
        let segs: Vec<Segment> = polyline_segments(&points).collect();

        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], Segment::new(Vec2::ZERO, Vec2::X));
        assert_eq!(segs[1], Segment::new(Vec2::X, Vec2::ONE));
    }

    #[test]
    fn short_polylines_have_no_segments() {
        assert_eq!(polyline_segments(&[]).count(), 0);
        assert_eq!(polyline_segments(&[Vec2::ONE]).count(), 0);
    }
}
