//! Input parsing helpers for the CLI.
//!
//! Tag names, entry IDs, creation dates and output formats arrive as raw
//! strings; these helpers turn them into core types with CLI-friendly errors.

mod parsing;

// Re-export public API
pub use parsing::{
    parse_category, parse_datetime, parse_entry_id, parse_mood, parse_output_format, OutputFormat,
};
