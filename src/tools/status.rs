//! NutriTrack Status Tool
//!
//! Provides runtime status information about the NutriTrack service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::dataset::DatasetSource;
use crate::nutrition::CalendarSettings;

/// Dashboard usage instructions for AI assistants
pub const DASHBOARD_INSTRUCTIONS: &str = r#"
# NutriTrack Dashboard Instructions

## Overview

NutriTrack groups food log entries by calendar day and computes two optional
reports over those days:

1. **Weekly Trends** - average daily calories, highest calorie day, total meals
2. **Macro Distribution** - carbs / protein / fats share of all macro grams

## Days

- A day is the calendar date of the entry timestamp in the configured timezone
  (see `nutritrack_status` -> `calendar`).
- Days are listed newest first. Meals inside a day keep the order they were logged.
- Day labels use the configured locale, e.g. "segunda-feira, 1 de janeiro".

## Tools

- `get_dashboard` - stats, the active report, and every day with its meals
- `group_logs` - raw day buckets with totals
- `weekly_summary` / `macro_distribution` - one report on demand
- `toggle_report` - select "weekly" or "macros"; selecting the active one hides it
- `get_report_view` - which report is currently selected
- `export_dashboard_markdown` - the dashboard as a markdown document
- `get_dashboard_stats` - users, daily analyses, pro subscriptions

All log tools accept an optional `logs` array. Without it they use the dataset
loaded at startup. Timestamps must be RFC 3339, e.g. "2024-01-01T12:30:00Z".

## Rounding

- Average calories and macro percentages are rounded half up.
- Each macro percentage is rounded on its own, so the three may add up to 99 or 101.

## Errors

- Weekly trends need at least one day.
- Macro distribution needs a non-zero macro total.
"#;

/// Runtime status of the NutriTrack service
#[derive(Debug, Clone, Serialize)]
pub struct NutriTrackStatus {
    /// Build information
    pub build_profile: &'static str,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Dataset information
    pub dataset: DatasetSource,
    pub log_entries: usize,
    pub calendar: CalendarSettings,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    dataset: DatasetSource,
    log_entries: usize,
    calendar: CalendarSettings,
}

impl StatusTracker {
    pub fn new(dataset: DatasetSource, log_entries: usize, calendar: CalendarSettings) -> Self {
        Self {
            start_time: Instant::now(),
            dataset,
            log_entries,
            calendar,
        }
    }

    pub fn get_status(&self) -> NutriTrackStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutriTrackStatus {
            build_profile: build_info.build_profile,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            dataset: self.dataset.clone(),
            log_entries: self.log_entries,
            calendar: self.calendar.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
