//! Human-readable renderings of millisecond timestamps.
//!
//! The plain functions render in the local timezone; the `_in` variants take
//! an explicit zone. Timestamps outside chrono's range render as the raw
//! millisecond value.

use chrono::{Local, TimeZone};

const FULL: &str = "%B %-d, %Y at %-I:%M %p";
const SHORT: &str = "%b %-d, %Y";
const DAY: &str = "%Y-%m-%d";

/// "January 5, 2025 at 3:45 PM"
pub fn format_full(millis: i64) -> String {
    format_full_in(millis, &Local)
}

/// "Jan 5, 2025"
pub fn format_short(millis: i64) -> String {
    format_short_in(millis, &Local)
}

/// "2025-01-05"
pub fn format_day(millis: i64) -> String {
    format_day_in(millis, &Local)
}

pub fn format_full_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    render(millis, tz, FULL)
}

pub fn format_short_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    render(millis, tz, SHORT)
}

pub fn format_day_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    render(millis, tz, DAY)
}

fn render<Tz: TimeZone>(millis: i64, tz: &Tz, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format(pattern).to_string(),
        None => millis.to_string(),
    }
}
