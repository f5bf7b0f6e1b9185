//! Build information
//!
//! Package metadata and the values embedded by `build.rs`, plus the startup
//! banner describing what the server is about to serve.

use serde::Serialize;

use crate::dataset::DatasetSource;
use crate::nutrition::CalendarSettings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Compile time in ISO 8601
pub const BUILD_TIMESTAMP: &str = match option_env!("NUTRITRACK_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Cargo profile, "debug" or "release"
pub const BUILD_PROFILE: &str = match option_env!("NUTRITRACK_BUILD_PROFILE") {
    Some(s) => s,
    None => "unknown",
};

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_timestamp: BUILD_TIMESTAMP,
            build_profile: BUILD_PROFILE,
        }
    }
}

fn describe_source(source: &DatasetSource) -> String {
    match source {
        DatasetSource::Demo => "built-in demo".to_string(),
        DatasetSource::File(path) => path.display().to_string(),
    }
}

/// Banner lines for the configured calendar and loaded dataset
pub fn startup_banner(
    calendar: &CalendarSettings,
    source: &DatasetSource,
    log_entries: usize,
) -> Vec<String> {
    let info = BuildInfo::current();
    let rule = "=".repeat(47);
    vec![
        rule.clone(),
        "  NutriTrack Dashboard Server".to_string(),
        format!("  Version: {} ({})", info.version, info.build_profile),
        format!("  Compiled: {}", info.build_timestamp),
        format!("  Calendar: {} / {}", calendar.locale, calendar.timezone),
        format!("  Dataset: {} ({} entries)", describe_source(source), log_entries),
        rule,
    ]
}

/// Print the startup banner to stderr (stdout belongs to the MCP transport)
pub fn print_startup_banner(calendar: &CalendarSettings, source: &DatasetSource, log_entries: usize) {
    for line in startup_banner(calendar, source, log_entries) {
        eprintln!("{}", line);
    }
}
