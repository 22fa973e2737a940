//! Application context for the Reflect CLI.
//!
//! Bundles the parsed CLI arguments with lazily resolved paths and settings.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use tracing::debug;

use reflect_core::{JournalStore, SqliteBackend};

use crate::cli::Cli;
use crate::config::DateFormat;
use crate::errors::CliError;
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

use super::resolver::{missing_journal_message, resolve_journal_path};

struct Settings {
    journal_path: PathBuf,
    date_format: DateFormat,
}

/// Application context that bundles CLI args with resolved settings.
pub struct AppContext<'a> {
    cli: &'a Cli,
    settings: OnceCell<Settings>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            settings: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    fn settings(&self) -> anyhow::Result<&Settings> {
        self.settings.get_or_try_init(|| {
            let (journal_path, date_format) = resolve_journal_path(self.cli)?;
            Ok(Settings {
                journal_path,
                date_format,
            })
        })
    }

    pub fn journal_path(&self) -> anyhow::Result<&Path> {
        Ok(&self.settings()?.journal_path)
    }

    pub fn date_format(&self) -> anyhow::Result<DateFormat> {
        Ok(self.settings()?.date_format)
    }

    /// Open the journal store. The database must already exist.
    pub fn open_store(&self) -> anyhow::Result<JournalStore<SqliteBackend>> {
        let path = self.journal_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_journal_message(path),
                "Run `reflect init` to create it.",
            )
            .into());
        }
        debug!(path = %path.display(), "Opening journal store");
        let backend = SqliteBackend::open(path)?;
        Ok(JournalStore::new(backend))
    }

    /// Build the UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
