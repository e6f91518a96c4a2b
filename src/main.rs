use std::io;

use koch_snowflake::{create_clap_command, handle_clap_matches, AppState, WindowPipeline};
use log::{error, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn main() -> io::Result<()> {
    let matches = create_clap_command().get_matches();
    let settings = handle_clap_matches(&matches);

    let log_config = ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Error)
        .set_time_level(log::LevelFilter::Debug)
        .build();
    // Only fails if a logger is already installed; keep going without one.
    if let Err(e) = TermLogger::init(
        settings.log_level,
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger unavailable: {}", e);
    }
    info!("Starting with {:?}", settings);

    let mut pipeline = WindowPipeline::new(&settings).inspect_err(|e| error!("{}", e))?;
    let mut state = AppState::new();
    pipeline.run(&mut state)?;

    info!("Exiting at depth {}", state.depth());
    Ok(())
}
