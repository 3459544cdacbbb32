//! Model Context Protocol (MCP) server implementation
//!
//! This module provides MCP server capabilities including:
//! - Tool invocation (read-only Hyperliquid info queries)
//! - Guided prompts (analysis workflows)
//!
//! The implementation uses rmcp SDK with procedural macros for routing.

pub mod handler;
pub mod prompts;
pub mod server;
pub mod types;

// Re-exports
pub use server::HyperliquidServer;
