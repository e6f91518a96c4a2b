use std::{
    fmt::Display,
    path::PathBuf,
    time::{Duration, Instant},
};

use clap::{Arg, Command};
use log::LevelFilter;

pub mod app;
pub mod core;
pub mod pipeline;

pub use app::AppState;
pub use crate::core::{Color, Depth, Point, Segment, Snowflake};
pub use pipeline::WindowPipeline;

/// How many frame times the rolling window keeps.
const FRAME_WINDOW: usize = 120;

pub struct Metrics {
    pub frame_time: Duration,
    pub fps_counter: u32,
    pub fps_update_timer: Instant,
    pub current_fps: f32,
    pub frame_times: Vec<f32>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            frame_time: Duration::from_secs_f32(1.0 / pipeline::TARGET_FPS as f32),
            fps_counter: 0,
            fps_update_timer: Instant::now(),
            current_fps: 0.0,
            frame_times: Vec::with_capacity(FRAME_WINDOW),
        }
    }

    /// Record one frame. Returns true once a second, when the FPS figure is refreshed.
    pub fn update(&mut self, frame_delta: Duration) -> bool {
        self.fps_counter += 1;
        self.frame_times.push(frame_delta.as_secs_f32() * 1000.0);
        if self.frame_times.len() > FRAME_WINDOW {
            self.frame_times.remove(0);
        }

        if self.fps_update_timer.elapsed() < Duration::from_secs(1) {
            return false;
        }

        let elapsed = self.fps_update_timer.elapsed().as_secs_f32();
        self.current_fps = self.fps_counter as f32 / elapsed;
        self.fps_counter = 0;
        self.fps_update_timer = Instant::now();
        self.frame_time = Duration::from_secs_f32(self.average_ms() / 1000.0);
        true
    }

    pub fn average_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FPS: {:.1} | Frame Time: {:.2}ms",
            self.current_fps,
            self.frame_time.as_secs_f32() * 1000.0,
        )
    }
}

/// Runtime options. The defaults reproduce the plain viewer with no flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub font: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font: None,
            log_level: LevelFilter::Info,
        }
    }
}

pub fn create_clap_command() -> Command {
    Command::new("koch_snowflake")
        .about("Interactive Koch snowflake viewer")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help("Controls: Up/Down change depth (0-5), R resets, Esc or closing the window quits")
        .arg(
            Arg::new("font")
                .short('f')
                .long("font")
                .value_name("FILE")
                .help("TTF/OTF font for the on-screen text instead of the bundled DejaVu Sans")
                .value_parser(clap::value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log verbosity written to stderr")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .default_value("info"),
        )
}

pub fn handle_clap_matches(matches: &clap::ArgMatches) -> Settings {
    let font = matches.get_one::<PathBuf>("font").cloned();
    let log_level = matches
        .get_one::<String>("log-level")
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    Settings { font, log_level }
}
