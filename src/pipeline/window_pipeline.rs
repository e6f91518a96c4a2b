use std::io;
use std::time::Instant;

use log::{debug, info, trace};
use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};

use crate::app::{AppState, Command};
use crate::core::Snowflake;
use crate::pipeline::{
    draw_frame, FrameBuffer, TextRenderer, HEIGHT, HUD_FONT_SIZE, MARGIN, TARGET_FPS, WIDTH,
};
use crate::{Metrics, Settings};

pub const TITLE: &str = "Koch Snowflake";

/// Keys the viewer reacts to. Everything else is ignored.
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::Up => Some(Command::DepthUp),
        Key::Down => Some(Command::DepthDown),
        Key::R => Some(Command::Reset),
        Key::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Owns the window and everything drawn into it.
pub struct WindowPipeline {
    window: Window,
    buffer: FrameBuffer,
    snowflake: Snowflake,
    text: TextRenderer,
    last_frame: Instant,
    metrics: Metrics,
}

impl WindowPipeline {
    pub fn new(settings: &Settings) -> io::Result<Self> {
        let text = TextRenderer::load(settings.font.as_deref(), HUD_FONT_SIZE)?;

        let opts = WindowOptions {
            resize: false,
            scale: Scale::X1,
            title: true,
            borderless: false,
            ..WindowOptions::default()
        };
        let mut window = Window::new(TITLE, WIDTH, HEIGHT, opts).map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("Unable to open window: {}", e))
        })?;
        window.set_target_fps(TARGET_FPS);
        info!("Opened {}x{} window at {} fps", WIDTH, HEIGHT, TARGET_FPS);

        Ok(Self {
            window,
            buffer: FrameBuffer::new(WIDTH, HEIGHT),
            snowflake: Snowflake::new(WIDTH, HEIGHT, MARGIN),
            text,
            last_frame: Instant::now(),
            metrics: Metrics::new(),
        })
    }

    /// Drain this frame's input. A closed window counts as a quit.
    pub(crate) fn poll_commands(&self) -> Vec<Command> {
        if !self.window.is_open() {
            return vec![Command::Quit];
        }
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(command_for_key)
            .collect()
    }

    pub(crate) fn render_frame(&mut self, state: &AppState) -> io::Result<()> {
        let drawn = draw_frame(&mut self.buffer, &self.snowflake, &self.text, state.depth());
        trace!("Drew {} segments at depth {}", drawn, state.depth());

        // update_with_buffer sleeps to hold the target fps.
        self.window
            .update_with_buffer(&self.buffer.data, self.buffer.width, self.buffer.height)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

        let now = Instant::now();
        if self.metrics.update(now - self.last_frame) {
            self.window.set_title(&self.title());
        }
        self.last_frame = now;
        Ok(())
    }

    fn title(&self) -> String {
        format!("{} | {}", TITLE, self.metrics)
    }

    /// Run until the state stops. Input is handled before each frame is drawn.
    pub fn run(&mut self, state: &mut AppState) -> io::Result<()> {
        self.window.set_title(&self.title());

        while state.is_running() {
            let commands = self.poll_commands();
            if !commands.is_empty() {
                debug!("Commands: {:?}", commands);
            }
            state.apply_all(commands);
            if !state.is_running() {
                break;
            }

            self.render_frame(state)?;
        }

        info!("Render loop stopped");
        Ok(())
    }
}
