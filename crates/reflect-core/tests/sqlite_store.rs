use std::path::Path;
use std::time::Duration;

use reflect_core::{
    Category, EntryQuery, JournalStore, Mood, NewEntry, SqliteBackend,
};
use tempfile::TempDir;

fn open(path: &Path) -> JournalStore<SqliteBackend> {
    let backend = SqliteBackend::open(path).expect("open should succeed");
    JournalStore::new(backend)
}

#[test]
fn test_entries_survive_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("journal.db");

    let id = {
        let store = open(&path);
        store
            .insert(
                NewEntry::new("Persisted", "still here")
                    .with_mood(Mood::Grateful)
                    .with_category(Category::Gratitude)
                    .favorite(true),
            )
            .expect("insert should succeed")
    };
    assert!(path.exists());

    let store = open(&path);
    let entry = store.require(id).expect("entry should persist");
    assert_eq!(entry.title, "Persisted");
    assert_eq!(entry.mood, Some(Mood::Grateful));
    assert_eq!(entry.category, Some(Category::Gratitude));
    assert!(entry.favorite);
}

#[test]
fn test_ids_are_not_reused_after_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("journal.db");

    let last = {
        let store = open(&path);
        store.insert(NewEntry::new("a", "a")).unwrap();
        let last = store.insert(NewEntry::new("b", "b")).unwrap();
        assert!(store.delete(last).unwrap());
        last
    };

    let store = open(&path);
    let next = store.insert(NewEntry::new("c", "c")).unwrap();
    assert!(next > last);
}

#[test]
fn test_queries_over_sqlite() {
    let dir = TempDir::new().expect("temp dir");
    let store = open(&dir.path().join("journal.db"));

    store
        .insert(NewEntry::new("Morning run", "5k by the river").with_created_at(100))
        .unwrap();
    store
        .insert(
            NewEntry::new("Deadline", "shipped the RIVER release")
                .with_created_at(200)
                .with_category(Category::Work),
        )
        .unwrap();

    let found = store.query(&EntryQuery::search("river")).unwrap();
    let titles: Vec<_> = found.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Deadline", "Morning run"]);

    let work = store.query(&EntryQuery::Category(Category::Work)).unwrap();
    assert_eq!(work.len(), 1);
    assert_eq!(store.category_counts().unwrap()[0].count, 1);
}

#[tokio::test]
async fn test_live_query_over_sqlite() {
    let dir = TempDir::new().expect("temp dir");
    let store = open(&dir.path().join("journal.db"));
    let mut live = store.watch_all();

    let first = tokio::time::timeout(Duration::from_secs(2), live.next())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert!(first.is_empty());

    let writer = store.clone();
    tokio::task::spawn_blocking(move || writer.insert(NewEntry::new("t", "b")).unwrap())
        .await
        .unwrap();

    let next = tokio::time::timeout(Duration::from_secs(2), live.next())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert_eq!(next.len(), 1);
}
