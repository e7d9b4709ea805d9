//! Terminal logger setup for the binaries

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::{Error, Result};

/// Level shown for a `--verbose` count: 0 warn, 1 info, 2 debug, 3+ trace
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a terminal logger at the level for `verbosity`.
///
/// # Errors
///
/// Returns an error if a logger is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(
        level_for(verbosity),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| Error::InvalidConfiguration {
        message: format!("logger already initialized: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
