//! MCP Server Entry Point
//!
//! Loads the tool configuration (fail-fast on any malformed entry),
//! initializes logging, optionally spawns the debug surface, and starts the
//! server with the configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use search_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // A configuration error here stops the process before it serves anything.
    let config = Config::load()?;

    init_logging(&config.logging.level);

    info!(
        "Starting {} v{} with {} configured tool(s)",
        config.server.name,
        config.server.version,
        config.search.tools().len()
    );

    let server = McpServer::new(config.clone());

    #[cfg(feature = "http")]
    if config.debug.enabled {
        let debug_server = search_mcp_server::core::DebugServer::new(
            server.config().clone(),
            server.dispatcher().clone(),
        );
        info!("Debug surface enabled on {}", debug_server.address());
        tokio::spawn(async move {
            if let Err(e) = debug_server.run().await {
                tracing::error!("Debug surface failed: {}", e);
            }
        });
    }

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level, writing to stderr so
/// stdout stays free for the STDIO transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
