#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32, // Red component (0.0 - 1.0)
    pub g: f32, // Green component (0.0 - 1.0)
    pub b: f32, // Blue component (0.0 - 1.0)
}

impl Color {
    /// Create a color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Pack into the `0x00RRGGBB` layout minifb expects.
    pub fn to_u32(&self) -> u32 {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u32;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u32;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u32;
        (r << 16) | (g << 8) | b
    }

    /// Blend two packed colors channel by channel in integer space.
    /// `t` is in `0..=255`, where 255 is fully `end`.
    pub fn blend_u32(start: u32, end: u32, t: u8) -> u32 {
        let t = t as u32;
        let inv_t = 255 - t;

        [16, 8, 0].iter().fold(0, |acc, &shift| {
            let s = (start >> shift) & 0xFF;
            let e = (end >> shift) & 0xFF;
            acc | (((s * inv_t + e * t + 127) / 255) << shift)
        })
    }
}

// Predefined colors
impl Color {
    pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
    pub const LAVENDER: Color = Color::from_rgb8(200, 200, 255);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_lavender() {
        assert_eq!(Color::LAVENDER.to_u32(), 0x00C8C8FF);
        assert_eq!(Color::BLACK.to_u32(), 0);
        assert_eq!(Color::WHITE.to_u32(), 0x00FFFFFF);
    }

    #[test]
    fn blend_u32_endpoints() {
        let a = Color::BLACK.to_u32();
        let b = Color::WHITE.to_u32();
        assert_eq!(Color::blend_u32(a, b, 0), a);
        assert_eq!(Color::blend_u32(a, b, 255), b);
        assert_eq!(Color::blend_u32(a, b, 128), 0x00808080);
    }

    #[test]
    fn blend_u32_keeps_channels_apart() {
        let blended = Color::blend_u32(0x00FF0000, 0x000000FF, 128);
        assert_eq!(blended, 0x007F0080);
    }
}
