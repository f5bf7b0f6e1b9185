//! Data models
//!
//! Log records, derived day aggregates, and dashboard view state.

mod dashboard_stats;
mod day_bucket;
mod log_entry;
mod macros;
mod report_view;

pub use dashboard_stats::DashboardStats;
pub use day_bucket::{DayBucket, DayKey};
pub use log_entry::LogEntry;
pub use macros::Macros;
pub use report_view::{ReportKind, ReportView};
