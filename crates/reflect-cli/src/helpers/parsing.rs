//! Parsing helpers for tags, IDs, datetimes and output format.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use reflect_core::{Category, EntryId, Mood};

use crate::errors::CliError;

/// Output format for list-like commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<OutputFormat> {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        None | Some("table") => Ok(OutputFormat::Table),
        Some("plain") => Ok(OutputFormat::Plain),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid format: {} (expected table or plain)",
            other
        ))
        .into()),
    }
}

pub fn parse_entry_id(value: &str) -> anyhow::Result<EntryId> {
    value
        .parse::<EntryId>()
        .map_err(|e| CliError::invalid_input(e.to_string()).into())
}

pub fn parse_mood(value: &str) -> anyhow::Result<Mood> {
    value.parse::<Mood>().map_err(|e| {
        let names: Vec<&str> = Mood::ALL.iter().map(|m| m.tag()).collect();
        CliError::invalid_input(e.to_string())
            .with_hint(format!("Moods: {}", names.join(", ")))
            .into()
    })
}

pub fn parse_category(value: &str) -> anyhow::Result<Category> {
    value.parse::<Category>().map_err(|e| {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.tag()).collect();
        CliError::invalid_input(e.to_string())
            .with_hint(format!("Categories: {}", names.join(", ")))
            .into()
    })
}

/// Parse a datetime (ISO-8601, or YYYY-MM-DD as local midnight) into
/// milliseconds since the epoch.
pub fn parse_datetime(value: &str) -> anyhow::Result<i64> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.timestamp_millis());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid date value: {}", value))?;
        if let Some(local) = Local.from_local_datetime(&naive).earliest() {
            return Ok(local.timestamp_millis());
        }
    }

    Err(CliError::invalid_input(format!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
    .into())
}
