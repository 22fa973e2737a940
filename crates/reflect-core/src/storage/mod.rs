//! Storage layer: entry data types and persistence backends.
//!
//! - **types**: the entry model, mood/category tags and aggregation rows
//! - **traits**: the `EntryBackend` interface the journal store is generic over
//! - **memory** / **sqlite**: backend implementations

pub mod memory;
pub mod sqlite;
pub mod traits;
pub mod types;
pub mod validation;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;
pub use traits::EntryBackend;
pub use types::{Category, CategoryCount, Entry, EntryId, Mood, MoodCount, NewEntry};
