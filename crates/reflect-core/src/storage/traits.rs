//! Storage backend trait definition.
//!
//! The `EntryBackend` trait defines the persistence interface that the
//! journal store is generic over. This abstraction lets Reflect keep entries
//! in SQLite, purely in memory, or anywhere else without changing the store,
//! the live queries or the aggregation logic.

use super::types::{Entry, EntryId, NewEntry};
use crate::error::Result;

/// Persistence interface for journal entries.
///
/// Backends are plain data holders: validation, timestamp stamping and change
/// notification are the store's job. All implementations must ensure:
/// - IDs are positive, strictly increasing and never reused
/// - A write is complete when the method returns
/// - `list` reflects every completed write
pub trait EntryBackend: Send {
    /// Persist a new entry.
    ///
    /// `created_at` has already been resolved by the store and is used for both
    /// the creation and the modification timestamp.
    ///
    /// # Returns
    ///
    /// Returns the freshly assigned ID.
    fn insert(&mut self, entry: &NewEntry, created_at: i64) -> Result<EntryId>;

    /// Replace the record with `entry.id` wholesale.
    ///
    /// # Returns
    ///
    /// Returns `Ok(false)` without writing anything if no such record exists.
    fn replace(&mut self, entry: &Entry) -> Result<bool>;

    /// Remove the record with `id`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(false)` if there was nothing to remove.
    fn remove(&mut self, id: EntryId) -> Result<bool>;

    /// Get an entry by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get(&self, id: EntryId) -> Result<Option<Entry>>;

    /// Full snapshot of every stored entry, in no particular order.
    fn list(&self) -> Result<Vec<Entry>>;
}
