use std::io;
use std::path::Path;

use fontdue::{Font, FontSettings};
use glam::IVec2;
use log::{info, warn};

use crate::core::Color;
use crate::pipeline::buffer::FrameBuffer;

/// DejaVu Sans, compiled into the binary so the HUD never depends on the host.
pub const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

fn parse_font(data: &[u8], px: f32, name: &str) -> io::Result<Font> {
    Font::from_bytes(
        data,
        FontSettings {
            scale: px,
            ..FontSettings::default()
        },
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}: {}", name, e)))
}

pub fn load_font(path: &Path, px: f32) -> io::Result<Font> {
    let font_data = std::fs::read(path)?;
    parse_font(&font_data, px, &path.display().to_string())
}

pub fn bundled_font(px: f32) -> io::Result<Font> {
    parse_font(BUNDLED_FONT, px, "bundled DejaVu Sans")
}

/// Rasterizes HUD text into a framebuffer.
pub struct TextRenderer {
    font: Font,
    px: f32,
}

impl TextRenderer {
    pub fn new(font: Font, px: f32) -> Self {
        Self { font, px }
    }

    pub fn bundled(px: f32) -> io::Result<Self> {
        Ok(Self::new(bundled_font(px)?, px))
    }

    /// Use `preferred` when it loads, the bundled font otherwise.
    pub fn load(preferred: Option<&Path>, px: f32) -> io::Result<Self> {
        if let Some(path) = preferred {
            match load_font(path, px) {
                Ok(font) => {
                    info!("HUD font: {}", path.display());
                    return Ok(Self::new(font, px));
                }
                Err(e) => warn!(
                    "Could not load font {}, using the bundled one: {}",
                    path.display(),
                    e
                ),
            }
        }
        Self::bundled(px)
    }

    /// Draw `text` with its top-left corner at `origin`.
    pub fn draw_text(&self, buffer: &mut FrameBuffer, text: &str, origin: IVec2, color: Color) {
        let ascent = self
            .font
            .horizontal_line_metrics(self.px)
            .map(|m| m.ascent)
            .unwrap_or(self.px);
        let baseline = origin.y + ascent.round() as i32;
        let packed = color.to_u32();
        let mut cursor_x = origin.x as f32;

        for c in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(c, self.px);

            // ymin is the offset of the glyph's bottom edge from the baseline.
            let top = baseline - (metrics.height as i32 + metrics.ymin);
            let left = cursor_x.round() as i32 + metrics.xmin;

            for (i, &alpha) in bitmap.iter().enumerate() {
                if alpha == 0 {
                    continue;
                }
                let bx = (i % metrics.width) as i32;
                let by = (i / metrics.width) as i32;
                buffer.blend_pixel(IVec2::new(left + bx, top + by), packed, alpha);
            }

            cursor_x += metrics.advance_width;
        }
    }
}
