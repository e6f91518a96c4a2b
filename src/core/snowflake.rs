use glam::Vec2;

use crate::core::geometry::{Point, Segment};
use crate::core::koch::{koch_points, koch_segments, point_count};
use crate::core::Depth;

/// The equilateral triangle the snowflake grows from, centred on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    pub top: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl Snowflake {
    /// Fit the triangle into a `width` x `height` canvas, leaving `margin`
    /// pixels out of the smaller dimension.
    pub fn new(width: usize, height: usize, margin: f32) -> Self {
        let size = width.min(height) as f32 - margin;
        let tri_height = size * 3f32.sqrt() / 2.0;
        let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);

        Snowflake {
            top: Vec2::new(center.x, center.y - tri_height / 2.0),
            bottom_left: Vec2::new(center.x - size / 2.0, center.y + tri_height / 2.0),
            bottom_right: Vec2::new(center.x + size / 2.0, center.y + tri_height / 2.0),
        }
    }

    /// Edges in drawing order: top -> bottom right -> bottom left -> top.
    pub fn edges(&self) -> [(Point, Point); 3] {
        [
            (self.top, self.bottom_right),
            (self.bottom_right, self.bottom_left),
            (self.bottom_left, self.top),
        ]
    }

    pub fn curves(&self, depth: Depth) -> [Vec<Point>; 3] {
        self.edges()
            .map(|(start, end)| koch_points(start, end, depth.get()))
    }

    pub fn segments(&self, depth: Depth) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(3 * (point_count(depth.get()) - 1));
        for (start, end) in self.edges() {
            segments.extend(koch_segments(start, end, depth.get()));
        }
        segments
    }
}
