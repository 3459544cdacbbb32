//! MCP Server Implementation
//!
//! This module contains the HyperliquidServer struct which implements the MCP
//! ServerHandler trait.

use crate::hyperliquid::InfoClient;
use rmcp::handler::server::router::tool::ToolRouter;

/// Main Hyperliquid info MCP server struct
///
/// Holds the shared info API client and the tool router. The client carries
/// only connection configuration, so the struct is cheap to clone and safe to
/// share across concurrent tool invocations without locking.
#[derive(Clone)]
pub struct HyperliquidServer {
    /// Hyperliquid info API client for making requests
    pub client: InfoClient,

    /// Tool router for MCP tool routing
    pub tool_router: ToolRouter<Self>,
}

impl HyperliquidServer {
    /// Creates a new server instance against mainnet
    pub fn new() -> Self {
        Self::with_client(InfoClient::new())
    }

    /// Creates a new server instance with an explicit info client
    ///
    /// Used by transports that resolve the API base URL from configuration,
    /// and by tests that point the client at a non-routable address.
    pub fn with_client(client: InfoClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for HyperliquidServer {
    fn default() -> Self {
        Self::new()
    }
}
