//! UI primitives for the Reflect CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, styles, mood and category decorations
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String utilities (truncate, wrap, pad)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;

pub use render::{
    blank_line, header, hint, kv, print, print_error, receipt, simple_table, table, Column,
};

pub use format::{single_line, truncate};
