//! CLI error type carrying an exit code and an optional hint.

use std::fmt;

use reflect_core::JournalError;

use crate::constants::exit_codes;

/// An error the CLI reports with a specific exit code.
#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            code: exit_codes::NOT_FOUND,
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            code: exit_codes::INVALID_INPUT,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Exit code for an error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.code;
    }
    match err.downcast_ref::<JournalError>() {
        Some(JournalError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(JournalError::Validation(_)) | Some(JournalError::InvalidInput(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflect_core::EntryId;

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let not_found = anyhow::Error::from(JournalError::NotFound(EntryId::new(4)));
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);

        let invalid = anyhow::Error::from(JournalError::Validation("empty".into()));
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), 1);
    }

    #[test]
    fn test_cli_error_keeps_code() {
        let err = anyhow::Error::from(CliError::invalid_input("bad").with_hint("try again"));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }
}
