//! Entry queries: predicates and result ordering for live views.

use std::cmp::Ordering;

use crate::storage::types::{Category, Entry, Mood};

/// A live view over the journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryQuery {
    /// Every entry.
    All,
    /// Case-insensitive substring match on title or body. Holds the
    /// normalized (trimmed, lowercased) needle; build with [`EntryQuery::search`].
    Search(String),
    /// Entries tagged with exactly this mood.
    Mood(Mood),
    /// Entries tagged with exactly this category.
    Category(Category),
    /// Entries marked as favorite.
    Favorites,
}

impl EntryQuery {
    pub fn search(text: &str) -> Self {
        EntryQuery::Search(text.to_lowercase())
    }

    /// Whether `entry` belongs in this view.
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            EntryQuery::All => true,
            EntryQuery::Search(needle) => {
                entry.title.to_lowercase().contains(needle.as_str())
                    || entry.body.to_lowercase().contains(needle.as_str())
            }
            EntryQuery::Mood(mood) => entry.mood == Some(*mood),
            EntryQuery::Category(category) => entry.category == Some(*category),
            EntryQuery::Favorites => entry.favorite,
        }
    }

    /// Short label for logs and headers.
    pub fn describe(&self) -> String {
        match self {
            EntryQuery::All => "all".to_string(),
            EntryQuery::Search(needle) => format!("search \"{}\"", needle),
            EntryQuery::Mood(mood) => format!("mood {}", mood),
            EntryQuery::Category(category) => format!("category {}", category),
            EntryQuery::Favorites => "favorites".to_string(),
        }
    }
}

/// Default ordering: creation time descending, ties broken by ID descending.
pub fn newest_first(a: &Entry, b: &Entry) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// Filter a snapshot with `query` and sort it newest-first.
pub fn apply(query: &EntryQuery, entries: Vec<Entry>) -> Vec<Entry> {
    let mut matching: Vec<Entry> = entries.into_iter().filter(|e| query.matches(e)).collect();
    matching.sort_by(newest_first);
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::EntryId;

    fn entry(id: i64, created_at: i64, title: &str, body: &str) -> Entry {
        Entry {
            id: EntryId::new(id),
            title: title.to_string(),
            body: body.to_string(),
            created_at,
            modified_at: created_at,
            mood: None,
            category: None,
            attachment: None,
            favorite: false,
        }
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_and_body() {
        let query = EntryQuery::search("BEACH");
        assert!(query.matches(&entry(1, 0, "Beach day", "sun")));
        assert!(query.matches(&entry(2, 0, "Saturday", "went to the beach")));
        assert!(!query.matches(&entry(3, 0, "Office", "meetings")));
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let query = EntryQuery::search(" day");
        assert!(!query.matches(&entry(1, 0, "Sunday", "brunch")));
        assert!(query.matches(&entry(2, 0, "Lazy day", "brunch")));
        assert!(query.matches(&entry(3, 0, "Rest", "a slow DAY off")));
    }

    #[test]
    fn test_tag_queries_use_exact_equality() {
        let mut e = entry(1, 0, "t", "b");
        e.mood = Some(Mood::Sad);
        e.category = Some(Category::Work);

        assert!(EntryQuery::Mood(Mood::Sad).matches(&e));
        assert!(!EntryQuery::Mood(Mood::Happy).matches(&e));
        assert!(EntryQuery::Category(Category::Work).matches(&e));
        assert!(!EntryQuery::Category(Category::Travel).matches(&e));
        assert!(!EntryQuery::Favorites.matches(&e));
    }

    #[test]
    fn test_newest_first_breaks_ties_by_id() {
        let entries = vec![
            entry(1, 100, "a", "a"),
            entry(2, 300, "b", "b"),
            entry(3, 100, "c", "c"),
        ];
        let ids: Vec<i64> = apply(&EntryQuery::All, entries)
            .iter()
            .map(|e| e.id.get())
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
