//! NutriMetrics
//!
//! An MCP server for nutrient analysis of meal plans.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutrimetrics::build_info;
use nutrimetrics::config::ConfigPaths;
use nutrimetrics::mcp::NutrimetricsService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrimetrics=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Resolve and initialize the configuration directory
    let paths = ConfigPaths::resolve()?;
    eprintln!("Configuration directory: {}", paths.root.display());
    let written = paths.initialize()?;
    if !written.is_empty() {
        eprintln!("Initialized {} default configuration files", written.len());
    }

    // Create the NutriMetrics service
    let service = NutrimetricsService::new(paths);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
