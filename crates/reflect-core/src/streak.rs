//! Writing streaks: consecutive calendar days with at least one entry.

use std::collections::BTreeSet;

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Current streak for millisecond timestamps, in the local timezone as of now.
pub fn calculate_streak(timestamps: &[i64]) -> u32 {
    calculate_streak_at(timestamps, &Local::now())
}

/// Current streak as seen at `now`. Timestamps are bucketed into calendar days
/// in `now`'s timezone; ones chrono cannot represent are skipped.
///
/// The streak is active only if the most recent day is today or yesterday.
pub fn calculate_streak_at<Tz: TimeZone>(timestamps: &[i64], now: &DateTime<Tz>) -> u32 {
    let tz = now.timezone();
    let days: BTreeSet<NaiveDate> = timestamps
        .iter()
        .filter_map(|&ts| tz.timestamp_millis_opt(ts).single())
        .map(|dt| dt.date_naive())
        .collect();

    let Some(&latest) = days.last() else {
        return 0;
    };

    let today = now.date_naive();
    let yesterday = today.pred_opt();
    if latest != today && Some(latest) != yesterday {
        return 0;
    }

    let mut streak = 0;
    let mut expected = Some(latest);
    for day in days.iter().rev() {
        if Some(*day) != expected {
            break;
        }
        streak += 1;
        expected = day.pred_opt();
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn days_ago(now: &DateTime<Utc>, days: i64) -> i64 {
        (*now - Duration::days(days)).timestamp_millis()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calculate_streak_at(&[], &noon(2025, 1, 10)), 0);
    }

    #[test]
    fn test_single_entry_today_or_yesterday() {
        let now = noon(2025, 1, 10);
        assert_eq!(calculate_streak_at(&[days_ago(&now, 0)], &now), 1);
        assert_eq!(calculate_streak_at(&[days_ago(&now, 1)], &now), 1);
        assert_eq!(calculate_streak_at(&[days_ago(&now, 2)], &now), 0);
    }

    #[test]
    fn test_consecutive_days() {
        let now = noon(2025, 3, 2);
        let ts: Vec<i64> = (0..5).map(|d| days_ago(&now, d)).collect();
        assert_eq!(calculate_streak_at(&ts, &now), 5);
    }

    #[test]
    fn test_gap_caps_streak() {
        let now = noon(2025, 1, 10);
        let ts = [days_ago(&now, 0), days_ago(&now, 2), days_ago(&now, 3)];
        assert_eq!(calculate_streak_at(&ts, &now), 1);
    }

    #[test]
    fn test_same_day_counts_once() {
        let now = noon(2025, 1, 10);
        let base = days_ago(&now, 0);
        let ts = [base, base - 3_600_000, base - 7_200_000, days_ago(&now, 1)];
        assert_eq!(calculate_streak_at(&ts, &now), 2);
    }

    #[test]
    fn test_streak_ending_yesterday() {
        let now = noon(2025, 1, 10);
        let ts = [days_ago(&now, 1), days_ago(&now, 2), days_ago(&now, 3)];
        assert_eq!(calculate_streak_at(&ts, &now), 3);
    }

    #[test]
    fn test_days_follow_the_given_timezone() {
        // 2025-01-09 23:30 UTC is already 2025-01-10 in UTC+2.
        let late = Utc.with_ymd_and_hms(2025, 1, 9, 23, 30, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = plus_two.with_ymd_and_hms(2025, 1, 11, 9, 0, 0).unwrap();

        let ts = [late.timestamp_millis()];
        assert_eq!(calculate_streak_at(&ts, &now), 1);
        assert_eq!(calculate_streak_at(&ts, &now.with_timezone(&Utc)), 0);
    }

    #[test]
    fn test_crosses_month_boundary() {
        let now = noon(2025, 3, 1);
        let ts = [days_ago(&now, 0), days_ago(&now, 1), days_ago(&now, 2)];
        assert_eq!(calculate_streak_at(&ts, &now), 3);
    }

    #[test]
    fn test_unrepresentable_timestamps_are_ignored() {
        let now = noon(2025, 1, 10);
        assert_eq!(calculate_streak_at(&[i64::MAX, days_ago(&now, 0)], &now), 1);
    }
}
