//! Utility to print the dashboard as markdown
//!
//! Usage: dashboard_report [weekly|macros] [dataset.json]
//! The dataset path falls back to NUTRITRACK_DATA_PATH, then the demo data.

use std::path::PathBuf;

use nutritrack::config::Config;
use nutritrack::dataset::Dataset;
use nutritrack::models::{ReportKind, ReportView};
use nutritrack::tools::dashboard::export_dashboard_markdown;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::from_env();
    let mut view = ReportView::None;

    for arg in std::env::args().skip(1) {
        match ReportKind::from_str(&arg) {
            Some(kind) => view = kind.into(),
            None => config.data_path = Some(PathBuf::from(arg)),
        }
    }

    let calendar = config.calendar()?;
    let (dataset, _) = Dataset::load_or_demo(config.data_path.as_deref())?;

    let export = export_dashboard_markdown(
        &calendar,
        &dataset.stats,
        &dataset.logs,
        view,
        chrono::Utc::now(),
    );
    print!("{}", export.markdown);

    Ok(())
}
