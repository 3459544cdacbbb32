//! MCP Tool Parameter Types
//!
//! Parameter structs for MCP tools with JsonSchema support. Field names match
//! the tool contract the server has always exposed (snake_case), so they are
//! not renamed for serialization.

use crate::normalize::TimeInput;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Common parameter for user-scoped tools
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddressParams {
    /// Hyperliquid account address
    #[schemars(
        description = "Hyperliquid account address (e.g., 0xcd5051944f780a621ee62e39e493c489668acf4d)"
    )]
    pub account_address: String,
}

/// Parameters for user state queries
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UserStateParams {
    /// Hyperliquid account address
    #[schemars(
        description = "Hyperliquid account address (e.g., 0xcd5051944f780a621ee62e39e493c489668acf4d)"
    )]
    pub account_address: String,

    /// Query spot state instead of perpetuals state
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "If true, query spot user state; otherwise perpetuals state (default: false)")]
    pub check_spot: Option<bool>,
}

/// Common parameter for coin-scoped tools
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CoinParams {
    /// Trading symbol
    #[schemars(description = "Trading symbol (e.g., BTC, ETH)")]
    pub coin_name: String,
}

/// Parameters for coin-scoped time-range queries
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CoinTimeRangeParams {
    /// Trading symbol
    #[schemars(description = "Trading symbol (e.g., BTC, ETH)")]
    pub coin_name: String,

    /// Range start, ISO 8601 string or epoch milliseconds
    #[schemars(description = "Start time: ISO 8601 (e.g., 2025-01-01T00:00:00Z) or epoch milliseconds")]
    pub start_time: TimeInput,

    /// Range end, ISO 8601 string or epoch milliseconds
    #[schemars(description = "End time: ISO 8601 (e.g., 2025-12-31T23:59:59Z) or epoch milliseconds")]
    pub end_time: TimeInput,
}

/// Parameters for user-scoped time-range queries
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UserTimeRangeParams {
    /// Hyperliquid account address
    #[schemars(
        description = "Hyperliquid account address (e.g., 0xcd5051944f780a621ee62e39e493c489668acf4d)"
    )]
    pub account_address: String,

    /// Range start, ISO 8601 string or epoch milliseconds
    #[schemars(description = "Start time: ISO 8601 (e.g., 2025-01-01T00:00:00Z) or epoch milliseconds")]
    pub start_time: TimeInput,

    /// Range end, ISO 8601 string or epoch milliseconds
    #[schemars(description = "End time: ISO 8601 (e.g., 2025-12-31T23:59:59Z) or epoch milliseconds")]
    pub end_time: TimeInput,
}

/// Parameters for candle snapshot queries
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CandlesParams {
    /// Trading symbol
    #[schemars(description = "Trading symbol (e.g., BTC, ETH)")]
    pub coin_name: String,

    /// Candle interval
    #[schemars(description = "Candle interval: 1m, 3m, 5m, 15m, 30m, 1h, 2h, 4h, 8h, 12h, 1d, 3d, 1w, or 1M")]
    pub interval: String,

    /// Range start, ISO 8601 string or epoch milliseconds
    #[schemars(description = "Start time: ISO 8601 (e.g., 2025-01-01T00:00:00Z) or epoch milliseconds")]
    pub start_time: TimeInput,

    /// Range end, ISO 8601 string or epoch milliseconds
    #[schemars(description = "End time: ISO 8601 (e.g., 2025-12-31T23:59:59Z) or epoch milliseconds")]
    pub end_time: TimeInput,
}

/// Parameters for metadata queries
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct MetadataParams {
    /// Include per-asset contexts alongside the metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "If true, include asset contexts (mark price, funding, open interest) with the metadata (default: false)")]
    pub include_asset_ctxs: Option<bool>,
}

/// Parameters for order lookup by exchange-assigned order id
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OrderByOidParams {
    /// Hyperliquid account address
    #[schemars(
        description = "Hyperliquid account address (e.g., 0xcd5051944f780a621ee62e39e493c489668acf4d)"
    )]
    pub account_address: String,

    /// Exchange-assigned order id
    #[schemars(description = "Exchange-assigned numeric order id")]
    pub oid: u64,
}

/// Parameters for order lookup by client order id
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OrderByCloidParams {
    /// Hyperliquid account address
    #[schemars(
        description = "Hyperliquid account address (e.g., 0xcd5051944f780a621ee62e39e493c489668acf4d)"
    )]
    pub account_address: String,

    /// Client-assigned order id
    #[schemars(description = "Client-assigned order id (cloid), a 128-bit hex string")]
    pub cloid: String,
}
