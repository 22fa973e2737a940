//! In-memory storage backend.
//!
//! Entries live in a `BTreeMap` for the lifetime of the process. Used for tests
//! and for embedding the store without any durable medium.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::storage::traits::EntryBackend;
use crate::storage::types::{Entry, EntryId, NewEntry};

/// Volatile entry backend.
#[derive(Debug)]
pub struct MemoryBackend {
    entries: BTreeMap<EntryId, Entry>,
    next_id: i64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryBackend for MemoryBackend {
    fn insert(&mut self, entry: &NewEntry, created_at: i64) -> Result<EntryId> {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;

        let record = Entry {
            id,
            title: entry.title.clone(),
            body: entry.body.clone(),
            created_at,
            modified_at: created_at,
            mood: entry.mood,
            category: entry.category,
            attachment: entry.attachment.clone(),
            favorite: entry.favorite,
        };

        // Collision means the ID counter went backwards.
        let previous = self.entries.insert(id, record);
        assert!(previous.is_none(), "duplicate entry id {} assigned", id);

        Ok(id)
    }

    fn replace(&mut self, entry: &Entry) -> Result<bool> {
        match self.entries.get_mut(&entry.id) {
            Some(slot) => {
                *slot = entry.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&mut self, id: EntryId) -> Result<bool> {
        Ok(self.entries.remove(&id).is_some())
    }

    fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        Ok(self.entries.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.values().cloned().collect())
    }
}
