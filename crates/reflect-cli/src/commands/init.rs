use std::path::PathBuf;

use tracing::info;

use reflect_core::SqliteBackend;

use crate::app::resolve_config_path;
use crate::cli::{Cli, InitArgs};
use crate::config::{default_journal_path, write_config, ReflectConfig};
use crate::errors::CliError;
use crate::ui::{print, receipt, UiContext};

/// Expand a leading `~` to `$HOME`.
fn expand_tilde(input: &str) -> PathBuf {
    let Ok(home) = std::env::var("HOME") else {
        return PathBuf::from(input);
    };
    if input == "~" {
        return PathBuf::from(home);
    }
    match input.strip_prefix("~/") {
        Some(rest) => PathBuf::from(home).join(rest),
        None => PathBuf::from(input),
    }
}

pub fn handle_init(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}",
            config_path.display()
        ))
        .with_hint("Pass --force to overwrite it.")
        .into());
    }

    let journal_path = match args.path.as_deref().or(cli.journal.as_deref()) {
        Some(path) => expand_tilde(path.trim()),
        None => default_journal_path()?,
    };

    // Opening creates the database file and schema.
    SqliteBackend::open(&journal_path)?;
    write_config(&config_path, &ReflectConfig::new(journal_path.clone()))?;
    info!(
        journal = %journal_path.display(),
        config = %config_path.display(),
        "Initialized journal"
    );

    if !cli.quiet {
        let ui_ctx = UiContext::from_env(false, None, cli.no_color, cli.ascii);
        let items = [
            ("Journal", journal_path.display().to_string()),
            ("Config", config_path.display().to_string()),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, "Initialized journal", &items));
    }
    Ok(())
}
