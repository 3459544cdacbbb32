//! Hyperliquid HTTP Client
//!
//! HTTP client wrapper for the Hyperliquid public info API. Every query is a
//! POST of a typed [`InfoRequest`] to `{base_url}/info`; responses come back
//! as opaque JSON. The client holds only connection configuration, so one
//! instance is shared read-only across concurrent tool invocations.

use crate::error::McpError;
use crate::hyperliquid::types::{CandleSnapshotRequest, InfoRequest, OrderId};
use crate::hyperliquid::MAINNET_API_URL;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Hyperliquid info API HTTP client
///
/// Wraps `reqwest::Client` with exchange-specific configuration: base URL,
/// request timeout, and a crate-identifying user agent. Holds no per-call
/// state and no credentials; the info endpoint is public and read-only.
#[derive(Clone)]
pub struct InfoClient {
    /// HTTP client for making requests
    pub(crate) client: Client,
    /// Base URL for the Hyperliquid API (default: https://api.hyperliquid.xyz)
    pub(crate) base_url: String,
}

impl std::fmt::Debug for InfoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfoClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl InfoClient {
    /// Creates a new client against mainnet with default settings
    ///
    /// Default configuration:
    /// - Base URL: https://api.hyperliquid.xyz
    /// - Timeout: 10 seconds
    pub fn new() -> Self {
        Self::with_base_url(MAINNET_API_URL)
    }

    /// Creates a new client against a specific API base URL
    ///
    /// # Arguments
    /// * `base_url` - API root without trailing slash (e.g., mainnet or testnet URL)
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_base_url_and_timeout(base_url, Duration::from_secs(10))
    }

    /// Creates a new client with custom base URL and timeout
    pub fn with_base_url_and_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hyperliquid-info-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts an info request and returns the raw JSON response
    ///
    /// # Errors
    /// * `ConnectionError` - network failure, timeout, 5xx server error
    /// * `RateLimitError` - HTTP 429
    /// * `InvalidRequest` - HTTP 4xx (request the exchange rejected)
    /// * `ParseError` - response body is not valid JSON
    async fn post(&self, request: &InfoRequest) -> Result<Value, McpError> {
        let url = format!("{}/info", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(McpError::from(response.error_for_status().unwrap_err()));
        }

        let value: Value = response.json().await?;
        Ok(value)
    }

    /// Perpetuals account state: positions, margin summary, withdrawable balance
    ///
    /// Posts `{"type": "clearinghouseState", "user": ...}`.
    pub async fn user_state(&self, user: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::ClearinghouseState {
            user: user.to_string(),
        })
        .await
    }

    /// Spot account state: token balances
    pub async fn spot_user_state(&self, user: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::SpotClearinghouseState {
            user: user.to_string(),
        })
        .await
    }

    /// All resting orders for a user
    pub async fn open_orders(&self, user: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::OpenOrders {
            user: user.to_string(),
        })
        .await
    }

    /// Trade fill history for a user
    pub async fn user_fills(&self, user: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::UserFills {
            user: user.to_string(),
        })
        .await
    }

    /// Mid prices for all actively traded pairs
    pub async fn all_mids(&self) -> Result<Value, McpError> {
        self.post(&InfoRequest::AllMids).await
    }

    /// Perpetuals universe metadata
    pub async fn meta(&self) -> Result<Value, McpError> {
        self.post(&InfoRequest::Meta).await
    }

    /// Perpetuals metadata plus per-asset contexts
    ///
    /// Returns a two-element array: `[meta, assetCtxs]`.
    pub async fn meta_and_asset_ctxs(&self) -> Result<Value, McpError> {
        self.post(&InfoRequest::MetaAndAssetCtxs).await
    }

    /// Spot universe metadata
    pub async fn spot_meta(&self) -> Result<Value, McpError> {
        self.post(&InfoRequest::SpotMeta).await
    }

    /// Spot metadata plus per-asset contexts
    pub async fn spot_meta_and_asset_ctxs(&self) -> Result<Value, McpError> {
        self.post(&InfoRequest::SpotMetaAndAssetCtxs).await
    }

    /// Funding rate history for a coin between two epoch-millisecond bounds
    pub async fn funding_history(
        &self,
        coin: &str,
        start_time: i64,
        end_time: i64,
    ) -> Result<Value, McpError> {
        self.post(&InfoRequest::FundingHistory {
            coin: coin.to_string(),
            start_time,
            end_time,
        })
        .await
    }

    /// Funding payments charged/credited to a user between two epoch-millisecond bounds
    pub async fn user_funding_history(
        &self,
        user: &str,
        start_time: i64,
        end_time: i64,
    ) -> Result<Value, McpError> {
        self.post(&InfoRequest::UserFunding {
            user: user.to_string(),
            start_time,
            end_time,
        })
        .await
    }

    /// L2 order book snapshot for a coin
    pub async fn l2_snapshot(&self, coin: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::L2Book {
            coin: coin.to_string(),
        })
        .await
    }

    /// Candlestick snapshot for a coin over a validated interval and time range
    pub async fn candles_snapshot(
        &self,
        coin: &str,
        interval: &str,
        start_time: i64,
        end_time: i64,
    ) -> Result<Value, McpError> {
        self.post(&InfoRequest::CandleSnapshot {
            req: CandleSnapshotRequest {
                coin: coin.to_string(),
                interval: interval.to_string(),
                start_time,
                end_time,
            },
        })
        .await
    }

    /// Fee schedule and rates for a user
    pub async fn user_fees(&self, user: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::UserFees {
            user: user.to_string(),
        })
        .await
    }

    /// Staking (delegation) summary for a user
    pub async fn user_staking_summary(&self, user: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::DelegatorSummary {
            user: user.to_string(),
        })
        .await
    }

    /// Staking reward history for a user
    pub async fn user_staking_rewards(&self, user: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::DelegatorRewards {
            user: user.to_string(),
        })
        .await
    }

    /// Single order lookup by exchange-assigned order id
    pub async fn query_order_by_oid(&self, user: &str, oid: u64) -> Result<Value, McpError> {
        self.post(&InfoRequest::OrderStatus {
            user: user.to_string(),
            oid: OrderId::Oid(oid),
        })
        .await
    }

    /// Single order lookup by client-assigned order id (cloid)
    pub async fn query_order_by_cloid(&self, user: &str, cloid: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::OrderStatus {
            user: user.to_string(),
            oid: OrderId::Cloid(cloid.to_string()),
        })
        .await
    }

    /// Sub-accounts owned by a master account
    pub async fn query_sub_accounts(&self, user: &str) -> Result<Value, McpError> {
        self.post(&InfoRequest::SubAccounts {
            user: user.to_string(),
        })
        .await
    }
}

impl Default for InfoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = InfoClient::with_base_url("https://api.hyperliquid.xyz/");
        assert_eq!(client.base_url(), "https://api.hyperliquid.xyz");
    }

    #[test]
    fn test_debug_output_shows_base_url_only() {
        let client = InfoClient::new();
        let debug = format!("{:?}", client);
        assert!(debug.contains("api.hyperliquid.xyz"));
    }
}
