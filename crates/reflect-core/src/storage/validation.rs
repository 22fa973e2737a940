//! Entry content validation shared by every write path.

use crate::error::{JournalError, Result};

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// Reject entries whose title or body is blank, or whose title is too long.
pub fn validate_content(title: &str, body: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(JournalError::Validation(
            "Title cannot be empty".to_string(),
        ));
    }
    if body.trim().is_empty() {
        return Err(JournalError::Validation("Body cannot be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(JournalError::Validation(format!(
            "Title too long (max {} characters)",
            MAX_TITLE_CHARS
        )));
    }
    Ok(())
}
