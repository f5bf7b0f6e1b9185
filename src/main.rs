//! NutriTrack
//!
//! An MCP server for the nutrition log dashboard.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutritrack::build_info;
use nutritrack::config::Config;
use nutritrack::dataset::Dataset;
use nutritrack::mcp::NutriTrackService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutritrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let calendar = config.calendar()?;
    let (dataset, source) = Dataset::load_or_demo(config.data_path.as_deref())?;

    build_info::print_startup_banner(&calendar.settings(), &source, dataset.logs.len());
    eprintln!("Starting MCP server on stdio...");

    let service = NutriTrackService::new(calendar, dataset, source);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
