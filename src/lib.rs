// Library exports for hyperliquid-info-mcp

pub mod config; // Environment-driven configuration
pub mod error; // Error taxonomy
pub mod hyperliquid; // Hyperliquid info API client
pub mod mcp; // MCP server implementation
pub mod normalize; // Parameter validation and time normalization
pub mod shape; // Response shaping for metadata queries
pub mod transport; // MCP transport layer (stdio, SSE)
