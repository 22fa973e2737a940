//! Path resolution for config and journal files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, DateFormat};
use crate::constants::ENV_CONFIG;
use crate::errors::CliError;

/// Resolve the config file path, checking REFLECT_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(ENV_CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the journal path and date format from CLI args or config.
///
/// An explicit `--journal` wins over the config file; the date format still
/// comes from the config when one exists.
pub fn resolve_journal_path(cli: &Cli) -> anyhow::Result<(PathBuf, DateFormat)> {
    let config_path = resolve_config_path()?;
    let config = if config_path.exists() {
        Some(read_config(&config_path)?)
    } else {
        None
    };
    let date_format = config
        .as_ref()
        .map(|c| c.ui.date_format)
        .unwrap_or_default();

    if let Some(path) = cli.journal.as_deref() {
        return Ok((PathBuf::from(path), date_format));
    }

    match config {
        Some(config) => Ok((PathBuf::from(config.journal.path), date_format)),
        None => Err(CliError::not_found(
            missing_config_message(&config_path),
            "Run `reflect init` or pass --journal PATH.",
        )
        .into()),
    }
}

/// Error message when the journal database is missing.
pub fn missing_journal_message(path: &Path) -> String {
    format!("No journal found at {}", path.display())
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("No config found at {}", config_path.display())
}
