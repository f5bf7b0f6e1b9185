//! Day grouping
//!
//! Partitions a flat log sequence into per-day buckets, newest day first.

use std::collections::HashMap;

use tracing::debug;

use super::DayCalendar;
use crate::models::{DayBucket, DayKey, LogEntry};

/// Group entries by calendar day
///
/// Entries keep their input order inside a bucket. Buckets are ordered by the
/// timestamp of the first entry assigned to them, descending; equal
/// timestamps keep the order in which their days first appeared.
pub fn group_by_day(entries: &[LogEntry], calendar: &DayCalendar) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();
    let mut slots: HashMap<DayKey, usize> = HashMap::new();

    for entry in entries {
        let key = calendar.day_key(&entry.timestamp);
        let slot = *slots.entry(key).or_insert_with(|| {
            buckets.push(DayBucket::open(
                key,
                calendar.day_label(&entry.timestamp),
                calendar.weekday(&entry.timestamp),
                entry,
            ));
            buckets.len() - 1
        });
        buckets[slot].push(entry.clone());
    }

    // sort_by is stable, so ties keep creation order
    buckets.sort_by(|a, b| b.first_logged_at.cmp(&a.first_logged_at));

    debug!(entries = entries.len(), days = buckets.len(), "grouped log entries by day");
    buckets
}

/// Concatenate bucket entries in bucket order
pub fn flatten(buckets: &[DayBucket]) -> Vec<LogEntry> {
    buckets
        .iter()
        .flat_map(|bucket| bucket.entries.iter().cloned())
        .collect()
}
