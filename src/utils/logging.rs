use crate::utils::error::{AppError, AppResult};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Level used for a run: warnings only unless `--debug` was given
pub fn level_for(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the terminal logger on stderr so it never mixes with JSON output
pub fn init_logging(debug: bool) -> AppResult<()> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    TermLogger::init(level_for(debug), config, TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|e| AppError::System(format!("Failed to initialize logger: {}", e)))
}
