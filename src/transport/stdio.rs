//! Stdio Transport for MCP Server
//!
//! Provides standard I/O transport for local MCP connections (e.g., Claude
//! Desktop). Messages are read from stdin and responses are written to
//! stdout; logging goes to stderr to avoid interfering with the protocol.

use crate::mcp::HyperliquidServer;
use rmcp::ServiceExt;

/// Runs the MCP server with stdio transport
///
/// Returns Ok(()) when the server shuts down gracefully, or an error if
/// initialization fails.
pub async fn run_stdio_server(server: HyperliquidServer) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        upstream = server.client.base_url(),
        "Starting Hyperliquid info MCP server in stdio mode"
    );

    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("MCP server ready on stdio");

    // Wait for shutdown signal
    service.waiting().await?;

    tracing::info!("MCP server shutdown complete");

    Ok(())
}
