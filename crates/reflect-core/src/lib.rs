//! # Reflect Core
//!
//! Core library for Reflect, a personal journal with live-updating views.
//!
//! This crate owns the entry collection and everything derived from it,
//! independent of any user interface.
//!
//! ## Architecture
//!
//! - **storage**: entry model, validation and the `EntryBackend` implementations
//! - **store**: `JournalStore`, the validated write path and change notification
//! - **live**: live queries that recompute on every committed change
//! - **query**: view predicates and newest-first ordering
//! - **filter**: the `FilterComposer` holding search, mood and category selections
//! - **router**: binds the composer's current query to one live query
//! - **stats** / **streak**: on-demand aggregations and the writing streak
//! - **format**: date renderings for display

pub mod clock;
pub mod error;
pub mod filter;
pub mod format;
pub mod live;
pub mod query;
pub mod router;
pub mod stats;
pub mod storage;
pub mod store;
pub mod streak;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{JournalError, Result};
pub use filter::{FilterComposer, FilterState, QueryKind};
pub use live::{EntryWatch, LiveQuery};
pub use query::EntryQuery;
pub use router::{FilteredEntries, QueryRouter};
pub use stats::JournalStats;
pub use storage::{
    Category, CategoryCount, Entry, EntryBackend, EntryId, MemoryBackend, Mood, MoodCount,
    NewEntry, SqliteBackend,
};
pub use store::JournalStore;
pub use streak::{calculate_streak, calculate_streak_at};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
