//! Which of the three renderings a journal command prints.

use crate::helpers::OutputFormat;

/// How entries, receipts and stats reach stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Entry and stats documents as JSON; decorations suppressed.
    Json,
    /// Tab-separated entry rows and `key=value` receipts.
    #[default]
    Plain,
    /// Tables, mood emoji and category colours for an interactive terminal.
    Pretty,
}

impl OutputMode {
    /// `--json` always yields JSON. Pretty output needs a real terminal and
    /// no `--format plain`; pipes and `TERM=dumb` fall back to plain rows.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        match (json_flag, format) {
            (true, _) => Self::Json,
            (false, Some(OutputFormat::Plain)) => Self::Plain,
            (false, _) if is_tty && !term_is_dumb => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }

    pub fn is_pretty(&self) -> bool {
        *self == Self::Pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_json_ignores_format() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_rows_on_request() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_piped_journal_output_is_plain() {
        assert_eq!(OutputMode::resolve(false, None, true, true), OutputMode::Plain);
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), false, false),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_terminal_gets_entry_table() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Table), true, false);
        assert_eq!(mode, OutputMode::Pretty);
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Pretty);
    }
}
