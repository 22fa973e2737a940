//! Text and table output formatting.

use reflect_core::{Entry, JournalStats};

use crate::config::DateFormat;
use crate::ui::format::wrap;
use crate::ui::theme::{category_label, favorite_marker, mood_label, styled, styles};
use crate::ui::{
    blank_line, kv, print, simple_table, single_line, table, truncate, Column, UiContext,
};

const TITLE_MAX: usize = 40;
const SUMMARY_MAX: usize = 60;

/// Print a single entry in human-readable format.
pub fn print_entry(ui: &UiContext, entry: &Entry, dates: DateFormat, quiet: bool) {
    if !quiet {
        let title = if entry.favorite {
            format!("{} {}", favorite_marker(ui.unicode), entry.title)
        } else {
            entry.title.clone()
        };
        if ui.mode.is_pretty() {
            print(ui, &styled(&title, styles::bold(), ui.color));
        } else {
            print(ui, &kv(ui, "Title", &entry.title));
        }
        print(ui, &kv(ui, "ID", &entry.id.to_string()));
        print(ui, &kv(ui, "Created", &dates.render(entry.created_at)));
        if entry.modified_at != entry.created_at {
            print(ui, &kv(ui, "Modified", &dates.render(entry.modified_at)));
        }
        if let Some(mood) = entry.mood {
            print(ui, &kv(ui, "Mood", &mood_label(mood, ui.unicode)));
        }
        if let Some(category) = entry.category {
            print(ui, &kv(ui, "Category", &category_label(category, ui.color)));
        }
        if let Some(ref attachment) = entry.attachment {
            print(ui, &kv(ui, "Attachment", attachment));
        }
        if !ui.mode.is_pretty() {
            print(ui, &kv(ui, "Favorite", &entry.favorite.to_string()));
        }
        println!();
    }

    for line in wrap(&entry.body, ui.width.min(80)) {
        println!("{}", line);
    }
}

/// Print a list of entries as a table (pretty) or tab-separated lines.
pub fn print_entry_list(ui: &UiContext, entries: &[Entry], dates: DateFormat) {
    let columns = [
        Column::new("ID"),
        Column::new("Created"),
        Column::new("Title"),
        Column::new("Mood"),
        Column::new("Category"),
        Column::new("Summary"),
    ];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let mut title = truncate(&single_line(&entry.title), TITLE_MAX);
            if entry.favorite {
                title = format!("{} {}", favorite_marker(ui.unicode), title);
            }
            vec![
                entry.id.to_string(),
                dates.render(entry.created_at),
                title,
                entry
                    .mood
                    .map(|m| {
                        if ui.mode.is_pretty() {
                            mood_label(m, ui.unicode)
                        } else {
                            m.tag().to_string()
                        }
                    })
                    .unwrap_or_else(|| "-".to_string()),
                entry
                    .category
                    .map(|c| {
                        if ui.mode.is_pretty() {
                            category_label(c, ui.color)
                        } else {
                            c.tag().to_string()
                        }
                    })
                    .unwrap_or_else(|| "-".to_string()),
                truncate(&single_line(&entry.body), SUMMARY_MAX),
            ]
        })
        .collect();

    print(ui, &simple_table(ui, &columns, &rows));
}

/// Print totals, streak and distributions.
pub fn print_stats(ui: &UiContext, stats: &JournalStats) {
    print(ui, &kv(ui, "Total Entries", &stats.total.to_string()));
    let days = if stats.streak == 1 { "day" } else { "days" };
    print(ui, &kv(ui, "Current Streak", &format!("{} {}", stats.streak, days)));

    let mut moods = stats.moods.clone();
    moods.sort_by(|a, b| b.count.cmp(&a.count).then(a.mood.tag().cmp(b.mood.tag())));
    let mut categories = stats.categories.clone();
    categories.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(a.category.tag().cmp(b.category.tag()))
    });

    if ui.mode.is_pretty() {
        if !moods.is_empty() {
            blank_line(ui);
            let rows: Vec<Vec<String>> = moods
                .iter()
                .map(|row| vec![mood_label(row.mood, ui.unicode), row.count.to_string()])
                .collect();
            print(ui, &table(ui, &[Column::new("Mood"), Column::new("Entries")], &rows));
        }
        if !categories.is_empty() {
            blank_line(ui);
            let rows: Vec<Vec<String>> = categories
                .iter()
                .map(|row| vec![category_label(row.category, ui.color), row.count.to_string()])
                .collect();
            print(
                ui,
                &table(ui, &[Column::new("Category"), Column::new("Entries")], &rows),
            );
        }
    } else {
        for row in &moods {
            print(ui, &format!("mood.{}={}", row.mood.tag(), row.count));
        }
        for row in &categories {
            print(ui, &format!("category.{}={}", row.category.tag(), row.count));
        }
    }
}
