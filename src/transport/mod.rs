//! MCP transport layer
//!
//! Provides the transports over which the server is reachable:
//! - Stdio: standard I/O for local connections (e.g., Claude Desktop)
//! - SSE: Server-Sent Events for remote HTTP connections

pub mod sse;
pub mod stdio;

/// Transport mode selection for the MCP server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Standard I/O transport (local MCP connections)
    #[default]
    Stdio,

    /// Server-Sent Events transport (remote HTTP MCP connections)
    Sse,
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportMode::Stdio => write!(f, "stdio"),
            TransportMode::Sse => write!(f, "sse"),
        }
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdio" => Ok(TransportMode::Stdio),
            "sse" => Ok(TransportMode::Sse),
            other => Err(format!("Invalid transport mode: {}", other)),
        }
    }
}
