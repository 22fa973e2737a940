//! JSON output formatting.

use reflect_core::{Entry, JournalStats};

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "title": entry.title,
        "body": entry.body,
        "created_at": entry.created_at,
        "modified_at": entry.modified_at,
        "day": reflect_core::format::format_day(entry.created_at),
        "mood": entry.mood.map(|m| m.tag()),
        "category": entry.category.map(|c| c.tag()),
        "attachment": entry.attachment,
        "favorite": entry.favorite,
    })
}

/// Convert multiple entries to a JSON array.
pub fn entries_json(entries: &[Entry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

pub fn stats_json(stats: &JournalStats) -> serde_json::Value {
    let moods: Vec<_> = stats
        .moods
        .iter()
        .map(|row| serde_json::json!({ "mood": row.mood.tag(), "count": row.count }))
        .collect();
    let categories: Vec<_> = stats
        .categories
        .iter()
        .map(|row| serde_json::json!({ "category": row.category.tag(), "count": row.count }))
        .collect();
    serde_json::json!({
        "total": stats.total,
        "streak": stats.streak,
        "moods": moods,
        "categories": categories,
    })
}
