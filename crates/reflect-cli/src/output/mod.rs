//! Output formatting for entries and statistics.
//!
//! JSON output is stable for scripts; text output follows the UI mode
//! (pretty tables on a TTY, plain lines otherwise).

mod json;
mod text;

// Re-export public API
pub use json::{entries_json, entry_json, stats_json};
pub use text::{print_entry, print_entry_list, print_stats};
