//! Hyperliquid API Client
//!
//! This module contains the HTTP client and wire types for the exchange's
//! public info endpoint.

pub mod client;
pub mod types;

/// Mainnet info API root
pub const MAINNET_API_URL: &str = "https://api.hyperliquid.xyz";

/// Testnet info API root
pub const TESTNET_API_URL: &str = "https://api.hyperliquid-testnet.xyz";

// Re-export commonly used types
pub use client::InfoClient;
pub use types::{InfoRequest, OrderId, ALLOWED_INTERVALS};
