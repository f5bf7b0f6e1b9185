//! Day bucket model
//!
//! All log entries sharing a calendar day, with running totals.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{LogEntry, Macros};

/// Calendar day in the configured timezone, serialized as "2025-01-09"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Aggregate of one day's entries
///
/// Buckets are produced by the grouper only; `push` keeps the totals in step
/// with `entries`. Totals saturate at `u64::MAX` instead of wrapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub day_key: DayKey,
    /// Locale label, e.g. "segunda-feira, 1 de janeiro"
    pub label: String,
    pub weekday: String,
    /// Timestamp of the first entry assigned to this day
    pub first_logged_at: DateTime<Utc>,
    pub total_calories: u64,
    pub total_macros: Macros,
    pub entries: Vec<LogEntry>,
}

impl DayBucket {
    pub(crate) fn open(day_key: DayKey, label: String, weekday: String, first: &LogEntry) -> Self {
        Self {
            day_key,
            label,
            weekday,
            first_logged_at: first.timestamp,
            total_calories: 0,
            total_macros: Macros::zero(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.total_calories = self.total_calories.saturating_add(entry.calories);
        self.total_macros += entry.macros;
        self.entries.push(entry);
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
