//! SQLite storage backend.
//!
//! Entries are stored in a single `entries` table. Mood and category are kept
//! as their stable text tags; timestamps are integer milliseconds.

mod row;

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::Result;
use crate::storage::traits::EntryBackend;
use crate::storage::types::{Entry, EntryId, NewEntry};

use row::{EntryRow, ENTRY_COLUMNS};

/// Durable entry backend on top of SQLite.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (or create) a journal database file.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let backend = Self::from_connection(conn)?;
        info!(path = %path.display(), "Opened journal database");
        Ok(backend)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        Self::initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Create tables and indexes if they don't exist.
    fn initialize_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                modified_at INTEGER NOT NULL,
                mood TEXT,
                category TEXT,
                attachment TEXT,
                favorite INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_entries_created_at ON entries(created_at DESC);
            "#,
        )?;
        debug!("Journal schema ready");
        Ok(())
    }
}

impl EntryBackend for SqliteBackend {
    fn insert(&mut self, entry: &NewEntry, created_at: i64) -> Result<EntryId> {
        self.conn.execute(
            r#"
            INSERT INTO entries (
                title,
                body,
                created_at,
                modified_at,
                mood,
                category,
                attachment,
                favorite
            )
            VALUES (?1, ?2, ?3, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                entry.title,
                entry.body,
                created_at,
                entry.mood.map(|m| m.tag()),
                entry.category.map(|c| c.tag()),
                entry.attachment,
                entry.favorite,
            ],
        )?;

        Ok(EntryId::new(self.conn.last_insert_rowid()))
    }

    fn replace(&mut self, entry: &Entry) -> Result<bool> {
        let changed = self.conn.execute(
            r#"
            UPDATE entries
            SET title = ?2,
                body = ?3,
                created_at = ?4,
                modified_at = ?5,
                mood = ?6,
                category = ?7,
                attachment = ?8,
                favorite = ?9
            WHERE id = ?1
            "#,
            params![
                entry.id.get(),
                entry.title,
                entry.body,
                entry.created_at,
                entry.modified_at,
                entry.mood.map(|m| m.tag()),
                entry.category.map(|c| c.tag()),
                entry.attachment,
                entry.favorite,
            ],
        )?;
        Ok(changed > 0)
    }

    fn remove(&mut self, id: EntryId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1", [id.get()])?;
        Ok(changed > 0)
    }

    fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        let query = format!("SELECT {} FROM entries WHERE id = ?1", ENTRY_COLUMNS);
        let row = self
            .conn
            .query_row(&query, [id.get()], EntryRow::from_row)
            .optional()?;

        match row {
            Some(row) => Ok(Some(row.try_into()?)),
            None => Ok(None),
        }
    }

    fn list(&self) -> Result<Vec<Entry>> {
        let query = format!(
            "SELECT {} FROM entries ORDER BY created_at DESC, id DESC",
            ENTRY_COLUMNS
        );
        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map([], EntryRow::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::{Category, Mood};

    #[test]
    fn test_insert_and_get_round_trip() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        let new_entry = NewEntry::new("Title", "Body")
            .with_mood(Mood::Hopeful)
            .with_category(Category::Ideas)
            .with_attachment("file:///tmp/p.jpg")
            .favorite(true);

        let id = backend.insert(&new_entry, 5_000).unwrap();
        let stored = backend.get(id).unwrap().unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.title, "Title");
        assert_eq!(stored.body, "Body");
        assert_eq!(stored.created_at, 5_000);
        assert_eq!(stored.modified_at, 5_000);
        assert_eq!(stored.mood, Some(Mood::Hopeful));
        assert_eq!(stored.category, Some(Category::Ideas));
        assert_eq!(stored.attachment.as_deref(), Some("file:///tmp/p.jpg"));
        assert!(stored.favorite);
    }

    #[test]
    fn test_autoincrement_never_reuses_ids() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        let first = backend.insert(&NewEntry::new("a", "b"), 1).unwrap();
        let second = backend.insert(&NewEntry::new("c", "d"), 2).unwrap();
        assert!(backend.remove(second).unwrap());

        let third = backend.insert(&NewEntry::new("e", "f"), 3).unwrap();
        assert!(third > second);
        assert!(second > first);
    }

    #[test]
    fn test_replace_and_remove_missing() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        let id = backend.insert(&NewEntry::new("a", "b"), 1).unwrap();
        let mut stored = backend.get(id).unwrap().unwrap();

        stored.id = EntryId::new(id.get() + 100);
        assert!(!backend.replace(&stored).unwrap());
        assert!(!backend.remove(EntryId::new(id.get() + 100)).unwrap());
        assert_eq!(backend.list().unwrap().len(), 1);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        SqliteBackend::initialize_schema(&backend.conn).unwrap();
    }
}
