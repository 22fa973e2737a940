//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, journal, entry).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or rejected entry data.
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable overriding the config file location.
pub const ENV_CONFIG: &str = "REFLECT_CONFIG";

/// Directory name under the XDG config and data homes.
pub const APP_DIR: &str = "reflect";

/// Default journal database file name.
pub const JOURNAL_FILE: &str = "journal.db";

/// Default log level when neither `--verbose` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Name for the root tracing span covering one invocation.
pub const ROOT_SPAN_NAME: &str = "reflect";

/// Default number of entries shown by `list`.
pub const DEFAULT_LIST_LIMIT: usize = 20;
