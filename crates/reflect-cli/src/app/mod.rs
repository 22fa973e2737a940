//! Application-level utilities for the Reflect CLI.
//!
//! This module provides:
//! - Path resolution for config and journal files
//! - The per-invocation `AppContext` that opens the journal store

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
