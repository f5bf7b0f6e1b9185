//! Weekly trends
//!
//! Average calories, peak day and entry count over the day buckets.

use serde::Serialize;
use tracing::debug;

use super::{round_half_up, AggregateError, AggregateResult};
use crate::models::{DayBucket, DayKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    /// Mean daily calories, rounded half up
    pub average_calories: u64,
    pub peak_day: DayKey,
    pub peak_weekday: String,
    pub total_entries: usize,
    pub days: usize,
}

/// Summarize day buckets
///
/// The peak day is the first bucket holding the greatest calorie total.
pub fn summarize_weekly(buckets: &[DayBucket]) -> AggregateResult<WeeklySummary> {
    let (first, rest) = buckets.split_first().ok_or(AggregateError::EmptyInput)?;

    let total_calories: u128 = buckets.iter().map(|day| day.total_calories as u128).sum();
    // The mean never exceeds the largest bucket total
    let average_calories =
        u64::try_from(round_half_up(total_calories, buckets.len() as u128)).unwrap_or(u64::MAX);

    let peak = rest.iter().fold(first, |max, day| {
        if day.total_calories > max.total_calories {
            day
        } else {
            max
        }
    });

    let summary = WeeklySummary {
        average_calories,
        peak_day: peak.day_key,
        peak_weekday: peak.weekday.clone(),
        total_entries: buckets.iter().map(DayBucket::entry_count).sum(),
        days: buckets.len(),
    };

    debug!(
        days = summary.days,
        average = summary.average_calories,
        peak = %summary.peak_day,
        "weekly summary computed"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogEntry, Macros};
    use crate::nutrition::{group_by_day, DayCalendar};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn entry(id: &str, day: u32, hour: u32, calories: u64) -> LogEntry {
        LogEntry::new(
            id,
            "user1",
            Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap(),
            "meal",
            calories,
            Macros::zero(),
        )
    }

    fn day(d: u32) -> DayKey {
        DayKey::new(NaiveDate::from_ymd_opt(2024, 5, d).unwrap())
    }

    #[test]
    fn test_two_day_week() {
        let ts = |y, m, d, h| Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        let entries = vec![
            LogEntry::new("1", "u", ts(2024, 1, 1, 8), "a", 280, Macros::zero()),
            LogEntry::new("2", "u", ts(2024, 1, 1, 12), "b", 420, Macros::zero()),
            LogEntry::new("3", "u", ts(2023, 12, 31, 8), "c", 310, Macros::zero()),
            LogEntry::new("4", "u", ts(2023, 12, 31, 12), "d", 450, Macros::zero()),
            LogEntry::new("5", "u", ts(2023, 12, 31, 19), "e", 180, Macros::zero()),
        ];
        let buckets = group_by_day(&entries, &DayCalendar::utc());
        let summary = summarize_weekly(&buckets).unwrap();

        assert_eq!(summary.average_calories, 820);
        assert_eq!(summary.peak_day, DayKey::new(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
        assert_eq!(summary.peak_weekday, "Sunday");
        assert_eq!(summary.total_entries, 5);
        assert_eq!(summary.days, 2);
    }

    #[test]
    fn test_empty_buckets_fail() {
        assert_eq!(summarize_weekly(&[]), Err(AggregateError::EmptyInput));
    }

    #[test]
    fn test_average_rounds_half_up() {
        // (101 + 100) / 2 = 100.5 -> 101
        let entries = vec![entry("1", 2, 9, 101), entry("2", 1, 9, 100)];
        let buckets = group_by_day(&entries, &DayCalendar::utc());
        assert_eq!(summarize_weekly(&buckets).unwrap().average_calories, 101);

        // (100 + 100 + 101) / 3 = 100.33 -> 100
        let entries = vec![entry("1", 3, 9, 100), entry("2", 2, 9, 100), entry("3", 1, 9, 101)];
        let buckets = group_by_day(&entries, &DayCalendar::utc());
        assert_eq!(summarize_weekly(&buckets).unwrap().average_calories, 100);
    }

    #[test]
    fn test_peak_tie_goes_to_first_bucket() {
        let entries = vec![
            entry("1", 3, 9, 500),
            entry("2", 2, 9, 800),
            entry("3", 1, 9, 800),
        ];
        let buckets = group_by_day(&entries, &DayCalendar::utc());
        let summary = summarize_weekly(&buckets).unwrap();
        // Buckets are newest first: May 3, May 2, May 1
        assert_eq!(summary.peak_day, day(2));
    }

    #[test]
    fn test_single_bucket() {
        let entries = vec![entry("1", 4, 9, 300), entry("2", 4, 13, 250)];
        let buckets = group_by_day(&entries, &DayCalendar::utc());
        let summary = summarize_weekly(&buckets).unwrap();
        assert_eq!(summary.average_calories, 550);
        assert_eq!(summary.peak_day, day(4));
        assert_eq!(summary.total_entries, 2);
    }

    #[test]
    fn test_calorie_totals_near_u64_max() {
        let half = u64::MAX / 2 + 1;
        let buckets = group_by_day(&[entry("1", 1, 9, half)], &DayCalendar::utc());
        assert_eq!(summarize_weekly(&buckets).unwrap().average_calories, half);

        let entries = vec![entry("1", 2, 9, u64::MAX), entry("2", 1, 9, u64::MAX)];
        let buckets = group_by_day(&entries, &DayCalendar::utc());
        let summary = summarize_weekly(&buckets).unwrap();
        assert_eq!(summary.average_calories, u64::MAX);
        assert_eq!(summary.peak_day, day(2));
    }

    #[test]
    fn test_zero_calorie_days() {
        let entries = vec![entry("1", 2, 9, 0), entry("2", 1, 9, 0)];
        let buckets = group_by_day(&entries, &DayCalendar::utc());
        let summary = summarize_weekly(&buckets).unwrap();
        assert_eq!(summary.average_calories, 0);
        assert_eq!(summary.peak_day, day(2));
    }
}
