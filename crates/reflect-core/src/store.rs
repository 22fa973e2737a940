//! The journal store: the single authority over entries.
//!
//! `JournalStore` wraps a backend behind a mutex, validates and stamps every
//! write, and publishes a revision number after each committed change so live
//! queries can recompute. Handles are cheap to clone and share one backend.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{JournalError, Result};
use crate::live::{ChangeFeed, EntryWatch, LiveQuery, SnapshotSource};
use crate::query::{self, EntryQuery};
use crate::storage::traits::EntryBackend;
use crate::storage::types::{Entry, EntryId, NewEntry};
use crate::storage::validation::validate_content;

struct Shared<B> {
    backend: Mutex<B>,
    clock: Arc<dyn Clock>,
    changes: watch::Sender<u64>,
}

impl<B: EntryBackend> Shared<B> {
    fn lock(&self) -> Result<MutexGuard<'_, B>> {
        self.backend
            .lock()
            .map_err(|_| JournalError::Storage("journal backend lock poisoned".to_string()))
    }

    /// Publish a new revision. Called only after the backend lock is released.
    fn notify(&self) {
        self.changes.send_modify(|revision| *revision += 1);
    }
}

impl<B: EntryBackend> SnapshotSource for Shared<B> {
    fn snapshot(&self) -> Result<Vec<Entry>> {
        self.lock()?.list()
    }

    fn lookup(&self, id: EntryId) -> Result<Option<Entry>> {
        self.lock()?.get(id)
    }
}

/// Shared handle to a journal.
pub struct JournalStore<B: EntryBackend> {
    shared: Arc<Shared<B>>,
}

impl<B: EntryBackend> Clone for JournalStore<B> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<B: EntryBackend + 'static> JournalStore<B> {
    /// Create a store stamping timestamps from the system clock.
    pub fn new(backend: B) -> Self {
        Self::with_clock(backend, Arc::new(SystemClock))
    }

    pub fn with_clock(backend: B, clock: Arc<dyn Clock>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                backend: Mutex::new(backend),
                clock,
                changes,
            }),
        }
    }

    /// Number of committed changes since the store was opened.
    pub fn revision(&self) -> u64 {
        *self.shared.changes.borrow()
    }

    /// Validate and persist a new entry, returning its assigned ID.
    ///
    /// `created_at` defaults to now when the entry does not carry one;
    /// `modified_at` always starts equal to `created_at`.
    pub fn insert(&self, entry: NewEntry) -> Result<EntryId> {
        validate_content(&entry.title, &entry.body)?;
        let created_at = entry
            .created_at
            .unwrap_or_else(|| self.shared.clock.now_millis());

        let id = {
            let mut backend = self.shared.lock()?;
            backend.insert(&entry, created_at)?
        };
        self.shared.notify();

        debug!(id = %id, created_at, "Inserted entry");
        Ok(id)
    }

    /// Replace an existing entry's content.
    ///
    /// The stored creation time is kept regardless of what `entry` carries and
    /// `modified_at` is set to now. Fails with `NotFound` if the ID is unknown.
    pub fn update(&self, entry: Entry) -> Result<Entry> {
        let id = entry.id;
        let stored = self.modify(id, move |existing, now| {
            validate_content(&entry.title, &entry.body)?;
            Ok(Entry {
                created_at: existing.created_at,
                modified_at: now,
                ..entry
            })
        })?;
        debug!(id = %id, "Updated entry");
        Ok(stored)
    }

    /// Flip the favorite flag of an entry and return the updated entry.
    pub fn toggle_favorite(&self, id: EntryId) -> Result<Entry> {
        let stored = self.modify(id, |existing, now| {
            Ok(Entry {
                favorite: !existing.favorite,
                modified_at: now,
                ..existing.clone()
            })
        })?;
        debug!(id = %id, favorite = stored.favorite, "Toggled favorite");
        Ok(stored)
    }

    /// Remove an entry. Returns `false` (and notifies nobody) if it was absent.
    pub fn delete(&self, id: EntryId) -> Result<bool> {
        let removed = {
            let mut backend = self.shared.lock()?;
            backend.remove(id)?
        };
        if removed {
            self.shared.notify();
            debug!(id = %id, "Deleted entry");
        } else {
            debug!(id = %id, "Delete of unknown entry ignored");
        }
        Ok(removed)
    }

    pub fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        self.shared.lookup(id)
    }

    /// Like [`get`](Self::get) but an absent entry is a `NotFound` error.
    pub fn require(&self, id: EntryId) -> Result<Entry> {
        self.get(id)?.ok_or(JournalError::NotFound(id))
    }

    /// Snapshot of every entry, newest first.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        Ok(query::apply(&EntryQuery::All, self.shared.snapshot()?))
    }

    /// Snapshot of the entries matching `query`, newest first.
    pub fn query(&self, query: &EntryQuery) -> Result<Vec<Entry>> {
        Ok(query::apply(query, self.shared.snapshot()?))
    }

    /// Distinct creation timestamps in ascending order.
    pub fn created_timestamps(&self) -> Result<Vec<i64>> {
        let timestamps: BTreeSet<i64> = self
            .shared
            .snapshot()?
            .iter()
            .map(|entry| entry.created_at)
            .collect();
        Ok(timestamps.into_iter().collect())
    }

    /// Live stream of a single entry.
    pub fn subscribe(&self, id: EntryId) -> EntryWatch {
        self.feed().entry(id)
    }

    /// Live stream of every entry matching `predicate`, sorted by `order`.
    pub fn subscribe_all<P, O>(&self, predicate: P, order: O) -> LiveQuery
    where
        P: Fn(&Entry) -> bool + Send + Sync + 'static,
        O: Fn(&Entry, &Entry) -> std::cmp::Ordering + Send + Sync + 'static,
    {
        self.feed().query(Box::new(predicate), Box::new(order))
    }

    /// Live stream of a query in newest-first order.
    pub fn watch_query(&self, query: EntryQuery) -> LiveQuery {
        debug!(query = %query.describe(), "Opening live query");
        self.subscribe_all(move |entry| query.matches(entry), query::newest_first)
    }

    /// Live stream of all entries, newest first.
    pub fn watch_all(&self) -> LiveQuery {
        self.watch_query(EntryQuery::All)
    }

    /// Live stream of favorite entries, newest first.
    pub fn favorites(&self) -> LiveQuery {
        self.watch_query(EntryQuery::Favorites)
    }

    pub(crate) fn feed(&self) -> ChangeFeed {
        let shared: Arc<dyn SnapshotSource> = self.shared.clone();
        ChangeFeed::new(Arc::downgrade(&shared), self.shared.changes.subscribe())
    }

    /// Read-modify-write of one entry under the backend lock. `change` only
    /// runs once the entry is known to exist.
    fn modify<F>(&self, id: EntryId, change: F) -> Result<Entry>
    where
        F: FnOnce(&Entry, i64) -> Result<Entry>,
    {
        let stored = {
            let mut backend = self.shared.lock()?;
            let existing = backend.get(id)?.ok_or(JournalError::NotFound(id))?;
            let now = self.shared.clock.now_millis();
            if now < existing.created_at {
                warn!(
                    id = %id,
                    now,
                    created_at = existing.created_at,
                    "Clock is behind entry creation time"
                );
            }
            let mut stored = change(&existing, now.max(existing.created_at))?;
            stored.id = id;
            if !backend.replace(&stored)? {
                return Err(JournalError::NotFound(id));
            }
            stored
        };
        self.shared.notify();
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::memory::MemoryBackend;
    use crate::storage::types::Mood;

    fn store_at(now: i64) -> (JournalStore<MemoryBackend>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(now));
        let store = JournalStore::with_clock(MemoryBackend::new(), clock.clone());
        (store, clock)
    }

    #[test]
    fn test_insert_stamps_created_and_modified() {
        let (store, _) = store_at(1_000);
        let id = store.insert(NewEntry::new("Title", "Body")).unwrap();
        let entry = store.require(id).unwrap();
        assert_eq!(entry.created_at, 1_000);
        assert_eq!(entry.modified_at, 1_000);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_insert_keeps_explicit_created_at() {
        let (store, _) = store_at(1_000);
        let id = store
            .insert(NewEntry::new("Old", "Body").with_created_at(42))
            .unwrap();
        let entry = store.require(id).unwrap();
        assert_eq!(entry.created_at, 42);
        assert_eq!(entry.modified_at, 42);
    }

    #[test]
    fn test_invalid_insert_changes_nothing() {
        let (store, _) = store_at(1_000);
        let err = store.insert(NewEntry::new("  ", "Body")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.revision(), 0);
        assert!(store.entries().unwrap().is_empty());
    }

    #[test]
    fn test_update_preserves_created_at() {
        let (store, clock) = store_at(1_000);
        let id = store.insert(NewEntry::new("Title", "Body")).unwrap();
        clock.set(5_000);

        let mut edited = store.require(id).unwrap();
        edited.title = "New title".to_string();
        edited.created_at = 1;
        edited.mood = Some(Mood::Grateful);
        let stored = store.update(edited).unwrap();

        assert_eq!(stored.created_at, 1_000);
        assert_eq!(stored.modified_at, 5_000);
        assert_eq!(store.require(id).unwrap(), stored);
    }

    #[test]
    fn test_update_missing_entry_is_not_found() {
        let (store, _) = store_at(1_000);
        let id = store.insert(NewEntry::new("Title", "Body")).unwrap();
        let mut ghost = store.require(id).unwrap();
        ghost.id = EntryId::new(99);

        assert!(store.update(ghost).unwrap_err().is_not_found());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_update_missing_entry_wins_over_invalid_content() {
        let (store, _) = store_at(1_000);
        let id = store.insert(NewEntry::new("Title", "Body")).unwrap();
        let mut ghost = store.require(id).unwrap();
        ghost.id = EntryId::new(999);
        ghost.title = "   ".to_string();
        assert!(store.update(ghost.clone()).unwrap_err().is_not_found());

        ghost.title = "x".repeat(101);
        assert!(store.update(ghost).unwrap_err().is_not_found());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_update_existing_entry_still_validates() {
        let (store, _) = store_at(1_000);
        let id = store.insert(NewEntry::new("Title", "Body")).unwrap();
        let mut entry = store.require(id).unwrap();
        entry.title = "   ".to_string();

        assert!(store.update(entry).unwrap_err().is_validation());
        assert_eq!(store.require(id).unwrap().title, "Title");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_modified_at_never_precedes_created_at() {
        let (store, clock) = store_at(10_000);
        let id = store.insert(NewEntry::new("Title", "Body")).unwrap();
        clock.set(5);
        let stored = store.toggle_favorite(id).unwrap();
        assert_eq!(stored.modified_at, 10_000);
    }

    #[test]
    fn test_delete_absent_is_silent() {
        let (store, _) = store_at(1_000);
        let id = store.insert(NewEntry::new("Title", "Body")).unwrap();
        assert!(store.delete(id).unwrap());
        assert_eq!(store.revision(), 2);
        assert!(!store.delete(id).unwrap());
        assert_eq!(store.revision(), 2);
        assert!(store.get(id).unwrap().is_none());
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        let (store, _) = store_at(1_000);
        let id = store.insert(NewEntry::new("Title", "Body")).unwrap();
        assert!(store.toggle_favorite(id).unwrap().favorite);
        assert!(!store.toggle_favorite(id).unwrap().favorite);
        assert!(store
            .toggle_favorite(EntryId::new(7))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_created_timestamps_are_distinct_and_ascending() {
        let (store, _) = store_at(1_000);
        for ts in [300, 100, 300, 200] {
            store
                .insert(NewEntry::new("t", "b").with_created_at(ts))
                .unwrap();
        }
        assert_eq!(store.created_timestamps().unwrap(), vec![100, 200, 300]);
    }
}
