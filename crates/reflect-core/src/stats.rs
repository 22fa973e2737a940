//! Aggregations over a snapshot of the journal.
//!
//! Counts are computed on demand from a full snapshot; nothing here is live.
//! Mood and category counts omit tags with no entries and come back in
//! declaration order, though callers should sort if order matters to them.

use serde::Serialize;

use crate::error::Result;
use crate::storage::traits::EntryBackend;
use crate::storage::types::{Category, CategoryCount, Entry, Mood, MoodCount};
use crate::store::JournalStore;
use crate::streak::calculate_streak;

/// Everything the statistics view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalStats {
    pub total: usize,
    pub streak: u32,
    pub moods: Vec<MoodCount>,
    pub categories: Vec<CategoryCount>,
}

pub fn mood_counts(entries: &[Entry]) -> Vec<MoodCount> {
    Mood::ALL
        .iter()
        .map(|&mood| MoodCount {
            mood,
            count: entries.iter().filter(|e| e.mood == Some(mood)).count(),
        })
        .filter(|row| row.count > 0)
        .collect()
}

pub fn category_counts(entries: &[Entry]) -> Vec<CategoryCount> {
    Category::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: entries
                .iter()
                .filter(|e| e.category == Some(category))
                .count(),
        })
        .filter(|row| row.count > 0)
        .collect()
}

impl<B: EntryBackend + 'static> JournalStore<B> {
    pub fn total_count(&self) -> Result<usize> {
        Ok(self.entries()?.len())
    }

    pub fn mood_counts(&self) -> Result<Vec<MoodCount>> {
        Ok(mood_counts(&self.entries()?))
    }

    pub fn category_counts(&self) -> Result<Vec<CategoryCount>> {
        Ok(category_counts(&self.entries()?))
    }

    /// Streak over the current entries in the local timezone.
    pub fn current_streak(&self) -> Result<u32> {
        Ok(calculate_streak(&self.created_timestamps()?))
    }

    /// Total, streak and distributions from a single snapshot.
    pub fn stats(&self) -> Result<JournalStats> {
        let entries = self.entries()?;
        let timestamps: Vec<i64> = entries.iter().map(|e| e.created_at).collect();
        Ok(JournalStats {
            total: entries.len(),
            streak: calculate_streak(&timestamps),
            moods: mood_counts(&entries),
            categories: category_counts(&entries),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryBackend;
    use crate::storage::types::NewEntry;

    fn seeded() -> JournalStore<MemoryBackend> {
        let store = JournalStore::new(MemoryBackend::new());
        store
            .insert(NewEntry::new("a", "a").with_mood(Mood::Happy))
            .unwrap();
        store
            .insert(
                NewEntry::new("b", "b")
                    .with_mood(Mood::Happy)
                    .with_category(Category::Work),
            )
            .unwrap();
        store
            .insert(NewEntry::new("c", "c").with_mood(Mood::Sad))
            .unwrap();
        store.insert(NewEntry::new("d", "d")).unwrap();
        store
    }

    #[test]
    fn test_empty_journal() {
        let store = JournalStore::new(MemoryBackend::new());
        assert_eq!(store.total_count().unwrap(), 0);
        assert!(store.mood_counts().unwrap().is_empty());
        assert!(store.category_counts().unwrap().is_empty());
        assert_eq!(store.current_streak().unwrap(), 0);
    }

    #[test]
    fn test_counts_omit_zero_groups() {
        let store = seeded();
        assert_eq!(store.total_count().unwrap(), 4);

        let mut moods = store.mood_counts().unwrap();
        moods.sort_by_key(|row| row.mood.tag());
        assert_eq!(
            moods,
            vec![
                MoodCount { mood: Mood::Happy, count: 2 },
                MoodCount { mood: Mood::Sad, count: 1 },
            ]
        );

        assert_eq!(
            store.category_counts().unwrap(),
            vec![CategoryCount { category: Category::Work, count: 1 }]
        );
    }

    #[test]
    fn test_mood_counts_sum_to_tagged_entries() {
        let store = seeded();
        let entries = store.entries().unwrap();
        let tagged = entries.iter().filter(|e| e.mood.is_some()).count();
        let summed: usize = mood_counts(&entries).iter().map(|row| row.count).sum();
        assert_eq!(summed, tagged);
    }

    #[test]
    fn test_stats_bundle() {
        let store = seeded();
        let stats = store.stats().unwrap();
        assert_eq!(stats.total, 4);
        // entries were stamped just now
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.categories.len(), 1);
    }
}
