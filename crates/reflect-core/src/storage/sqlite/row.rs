//! Entry row type for database queries.

use crate::error::{JournalError, Result};
use crate::storage::types::{Category, Entry, EntryId, Mood};

/// Column list matching the field order of [`EntryRow`].
pub const ENTRY_COLUMNS: &str =
    "id, title, body, created_at, modified_at, mood, category, attachment, favorite";

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: i64,
    pub modified_at: i64,
    pub mood: Option<String>,
    pub category: Option<String>,
    pub attachment: Option<String>,
    pub favorite: bool,
}

impl EntryRow {
    /// Read a row selected with [`ENTRY_COLUMNS`].
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            body: row.get(2)?,
            created_at: row.get(3)?,
            modified_at: row.get(4)?,
            mood: row.get(5)?,
            category: row.get(6)?,
            attachment: row.get(7)?,
            favorite: row.get(8)?,
        })
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = JournalError;

    fn try_from(row: EntryRow) -> Result<Self> {
        if row.id <= 0 {
            return Err(JournalError::Storage(format!("Invalid entry id: {}", row.id)));
        }
        let mood = row
            .mood
            .as_deref()
            .map(|tag| {
                tag.parse::<Mood>()
                    .map_err(|_| JournalError::Storage(format!("Invalid mood tag: {}", tag)))
            })
            .transpose()?;
        let category = row
            .category
            .as_deref()
            .map(|tag| {
                tag.parse::<Category>()
                    .map_err(|_| JournalError::Storage(format!("Invalid category tag: {}", tag)))
            })
            .transpose()?;

        Ok(Entry {
            id: EntryId::new(row.id),
            title: row.title,
            body: row.body,
            created_at: row.created_at,
            modified_at: row.modified_at,
            mood,
            category,
            attachment: row.attachment,
            favorite: row.favorite,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> EntryRow {
        EntryRow {
            id: 3,
            title: "Title".to_string(),
            body: "Body".to_string(),
            created_at: 100,
            modified_at: 200,
            mood: Some("grateful".to_string()),
            category: None,
            attachment: None,
            favorite: true,
        }
    }

    #[test]
    fn test_row_converts_tags() {
        let entry: Entry = row().try_into().unwrap();
        assert_eq!(entry.id, EntryId::new(3));
        assert_eq!(entry.mood, Some(Mood::Grateful));
        assert_eq!(entry.category, None);
        assert!(entry.favorite);
    }

    #[test]
    fn test_unknown_tag_is_storage_error() {
        let mut bad = row();
        bad.category = Some("astrology".to_string());
        let result: Result<Entry> = bad.try_into();
        assert!(matches!(result, Err(JournalError::Storage(_))));
    }
}
