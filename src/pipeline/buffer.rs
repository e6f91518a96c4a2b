use crate::core::{Color, Segment};
use crate::pipeline::rasterizer::thick_line;
use glam::IVec2;

/// CPU side framebuffer in the `0x00RRGGBB` layout minifb presents.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.data.fill(color.to_u32());
    }

    #[inline]
    fn index(&self, pos: IVec2) -> Option<usize> {
        let in_bounds = pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height;
        in_bounds.then(|| pos.x as usize + pos.y as usize * self.width)
    }

    /// Out of bounds writes are dropped.
    pub fn set_pixel(&mut self, pos: IVec2, color: u32) {
        if let Some(index) = self.index(pos) {
            self.data[index] = color;
        }
    }

    pub fn get_pixel(&self, pos: IVec2) -> Option<u32> {
        self.index(pos).map(|index| self.data[index])
    }

    /// Blend `color` over whatever is already at `pos`, `alpha` in `0..=255`.
    pub fn blend_pixel(&mut self, pos: IVec2, color: u32, alpha: u8) {
        if let Some(index) = self.index(pos) {
            self.data[index] = Color::blend_u32(self.data[index], color, alpha);
        }
    }

    pub fn draw_line(&mut self, segment: &Segment, color: Color, width: u32) {
        let packed = color.to_u32();
        thick_line(segment.start, segment.end, width, |pos| {
            self.set_pixel(pos, packed);
        });
    }

    pub fn draw_segments(&mut self, segments: &[Segment], color: Color, width: u32) {
        for segment in segments {
            self.draw_line(segment, color, width);
        }
    }
}
