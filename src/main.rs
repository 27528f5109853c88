//! Metric-Imperial Converter (MIC)
//!
//! An MCP server for unit conversion.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use mic::build_info;
use mic::mcp::MicService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mic=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = MicService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
