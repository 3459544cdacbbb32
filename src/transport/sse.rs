//! SSE (Server-Sent Events) transport for MCP
//!
//! Uses rmcp's built-in SSE server implementation for remote HTTP
//! connections, enabling web-hosted access to the info server.

pub use rmcp::transport::sse_server::{SseServer, SseServerConfig};

// Re-export CancellationToken for convenience (required by SseServerConfig)
pub use tokio_util::sync::CancellationToken;
