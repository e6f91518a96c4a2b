use glam::IVec2;

use crate::core::{Color, Depth, Snowflake};

pub mod buffer;
pub mod rasterizer;
pub mod text;
pub mod window_pipeline;

pub use buffer::FrameBuffer;
pub use text::TextRenderer;
pub use window_pipeline::WindowPipeline;

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 900;
/// Pixels taken off the smaller canvas dimension before sizing the triangle.
pub const MARGIN: f32 = 300.0;
pub const TARGET_FPS: usize = 60;

pub const BACKGROUND: Color = Color::BLACK;
pub const SNOWFLAKE_COLOR: Color = Color::LAVENDER;
pub const LINE_WIDTH: u32 = 2;

pub const HUD_COLOR: Color = Color::WHITE;
// pygame renders its default font at 0.6875x the requested size, and the HUD asks for 36.
pub const HUD_FONT_SIZE: f32 = 24.0;
pub const HELP_TEXT: &str = "Up/Down: Change Depth | R: Reset";

pub fn depth_text(depth: Depth) -> String {
    format!("Depth: {}", depth)
}

/// Draws one complete frame into `buffer`: background, the snowflake at
/// `depth`, then the HUD on top. Returns the number of segments drawn.
pub fn draw_frame(
    buffer: &mut FrameBuffer,
    snowflake: &Snowflake,
    text: &TextRenderer,
    depth: Depth,
) -> usize {
    buffer.clear(BACKGROUND);

    let segments = snowflake.segments(depth);
    buffer.draw_segments(&segments, SNOWFLAKE_COLOR, LINE_WIDTH);

    let help_y = buffer.height as i32 - 40;
    text.draw_text(buffer, &depth_text(depth), IVec2::new(10, 10), HUD_COLOR);
    text.draw_text(buffer, HELP_TEXT, IVec2::new(10, help_y), HUD_COLOR);

    segments.len()
}
