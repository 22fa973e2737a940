//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`
//! overrides the level chosen from `--verbose` / `--quiet`.

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;
use crate::constants::DEFAULT_LOG_LEVEL;

pub fn init_logging(verbose: bool, quiet: bool, format: LogFormat) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // try_init: a subscriber may already be installed (tests)
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
