//! MCP Tool Router and ServerHandler Implementation
//!
//! This module implements the MCP protocol ServerHandler trait and provides
//! tool routing for Hyperliquid info queries using rmcp SDK macros.
//!
//! Every tool follows the same two-stage discipline: parameter validation
//! first (fail-fast, no network call), then a single upstream request whose
//! result is returned verbatim or lightly shaped.

use crate::error::McpError;
use crate::mcp::server::HyperliquidServer;
use crate::mcp::types::{
    AddressParams, CandlesParams, CoinParams, CoinTimeRangeParams, MetadataParams,
    OrderByCloidParams, OrderByOidParams, UserStateParams, UserTimeRangeParams,
};
use crate::normalize;
use crate::shape;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolResult, Content, ErrorData, GetPromptRequestParam, GetPromptResult, Implementation,
    InitializeResult, ListPromptsResult, PaginatedRequestParam, PromptsCapability,
    ProtocolVersion, ServerCapabilities, ToolsCapability,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{tool, tool_handler, tool_router};
use serde_json::{json, Value};

/// Converts a validation failure into an MCP invalid-params error
fn validation_error(err: McpError) -> ErrorData {
    ErrorData::invalid_params(err.to_string(), None)
}

/// Converts an upstream transport/API failure into an MCP internal error
fn upstream_error(err: McpError) -> ErrorData {
    ErrorData::internal_error(
        err.to_string(),
        Some(json!({"error_type": err.error_type(), "retryable": err.is_retryable()})),
    )
}

/// Wraps a raw upstream payload as tool text content
fn json_result(value: Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(value.to_string())])
}

/// MCP Tool Router for Hyperliquid info queries
///
/// Uses the #[tool_router] macro to automatically generate routing logic
/// and JSON Schema for all tools.
#[tool_router(vis = "pub")]
impl HyperliquidServer {
    /// Get user state: positions, margin summary, withdrawable balance
    #[tool(
        description = "Query user state including trading positions, margin summary, and withdrawable balance. Set check_spot=true for spot balances instead of perpetuals."
    )]
    pub async fn get_user_state(
        &self,
        params: Parameters<UserStateParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let UserStateParams {
            account_address,
            check_spot,
        } = params.0;
        normalize::validate_address(&account_address).map_err(validation_error)?;

        let state = if check_spot.unwrap_or(false) {
            self.client.spot_user_state(&account_address).await
        } else {
            self.client.user_state(&account_address).await
        }
        .map_err(upstream_error)?;

        Ok(json_result(state))
    }

    /// Get all open orders for a user
    #[tool(description = "Fetch all open orders for a specific user account")]
    pub async fn get_user_open_orders(
        &self,
        params: Parameters<AddressParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let account_address = params.0.account_address;
        normalize::validate_address(&account_address).map_err(validation_error)?;

        let orders = self
            .client
            .open_orders(&account_address)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(orders))
    }

    /// Get trade fill history for a user
    #[tool(description = "Fetch the trade fill history for a specific user account")]
    pub async fn get_user_trade_history(
        &self,
        params: Parameters<AddressParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let account_address = params.0.account_address;
        normalize::validate_address(&account_address).map_err(validation_error)?;

        let fills = self
            .client
            .user_fills(&account_address)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(fills))
    }

    /// Get mid prices for all trading pairs
    #[tool(description = "Retrieve the mid prices for all trading pairs available on the exchange")]
    pub async fn get_all_mids(&self) -> Result<CallToolResult, ErrorData> {
        let mids = self.client.all_mids().await.map_err(upstream_error)?;
        Ok(json_result(mids))
    }

    /// Get perpetual market metadata (universe listing)
    #[tool(
        description = "Retrieve metadata about perpetual markets available on the Hyperliquid exchange"
    )]
    pub async fn get_perp_dexs(&self) -> Result<CallToolResult, ErrorData> {
        let meta = self.client.meta().await.map_err(upstream_error)?;
        Ok(json_result(meta))
    }

    /// Get perpetual metadata, optionally with asset contexts
    #[tool(
        description = "Fetch metadata about perpetual markets. Set include_asset_ctxs=true to also get per-asset contexts (mark price, funding rate, open interest)."
    )]
    pub async fn get_perp_metadata(
        &self,
        params: Parameters<MetadataParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let include_asset_ctxs = params.0.include_asset_ctxs.unwrap_or(false);

        let meta = if include_asset_ctxs {
            self.client.meta_and_asset_ctxs().await
        } else {
            self.client
                .meta()
                .await
                .map(shape::meta_without_asset_ctxs)
        }
        .map_err(upstream_error)?;

        Ok(json_result(meta))
    }

    /// Get spot metadata, optionally with asset contexts
    #[tool(
        description = "Fetch metadata about spot markets. Set include_asset_ctxs=true to also get per-asset contexts."
    )]
    pub async fn get_spot_metadata(
        &self,
        params: Parameters<MetadataParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let include_asset_ctxs = params.0.include_asset_ctxs.unwrap_or(false);

        let meta = if include_asset_ctxs {
            self.client.spot_meta_and_asset_ctxs().await
        } else {
            self.client
                .spot_meta()
                .await
                .map(shape::meta_without_asset_ctxs)
        }
        .map_err(upstream_error)?;

        Ok(json_result(meta))
    }

    /// Get funding rate history for a coin
    #[tool(
        description = "Fetch the funding rate history for a specific coin over a time range (ISO 8601 or epoch milliseconds)"
    )]
    pub async fn get_coin_funding_history(
        &self,
        params: Parameters<CoinTimeRangeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let CoinTimeRangeParams {
            coin_name,
            start_time,
            end_time,
        } = params.0;
        normalize::validate_coin(&coin_name).map_err(validation_error)?;
        let (start_ms, end_ms) =
            normalize::to_epoch_range(&start_time, &end_time).map_err(validation_error)?;

        let history = self
            .client
            .funding_history(&coin_name, start_ms, end_ms)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(history))
    }

    /// Get funding payment history for a user
    #[tool(
        description = "Fetch the funding payment history for a specific user account over a time range (ISO 8601 or epoch milliseconds)"
    )]
    pub async fn get_user_funding_history(
        &self,
        params: Parameters<UserTimeRangeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let UserTimeRangeParams {
            account_address,
            start_time,
            end_time,
        } = params.0;
        normalize::validate_address(&account_address).map_err(validation_error)?;
        let (start_ms, end_ms) =
            normalize::to_epoch_range(&start_time, &end_time).map_err(validation_error)?;

        let history = self
            .client
            .user_funding_history(&account_address, start_ms, end_ms)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(history))
    }

    /// Get L2 order book snapshot for a coin
    #[tool(description = "Fetch the Level 2 order book snapshot (bids and asks) for a specific coin")]
    pub async fn get_l2_snapshot(
        &self,
        params: Parameters<CoinParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let coin_name = params.0.coin_name;
        normalize::validate_coin(&coin_name).map_err(validation_error)?;

        let book = self
            .client
            .l2_snapshot(&coin_name)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(book))
    }

    /// Get candlestick snapshot for a coin
    #[tool(
        description = "Fetch candlestick data for a specific coin, interval (e.g., 1m, 5m, 1h), and time range (ISO 8601 or epoch milliseconds)"
    )]
    pub async fn get_candles_snapshot(
        &self,
        params: Parameters<CandlesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let CandlesParams {
            coin_name,
            interval,
            start_time,
            end_time,
        } = params.0;
        normalize::validate_coin(&coin_name).map_err(validation_error)?;
        normalize::validate_interval(&interval).map_err(validation_error)?;
        let (start_ms, end_ms) =
            normalize::to_epoch_range(&start_time, &end_time).map_err(validation_error)?;

        let candles = self
            .client
            .candles_snapshot(&coin_name, &interval, start_ms, end_ms)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(candles))
    }

    /// Get fee structure and rates for a user
    #[tool(description = "Fetch the fee structure and rates (maker/taker) for a specific user account")]
    pub async fn get_user_fees(
        &self,
        params: Parameters<AddressParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let account_address = params.0.account_address;
        normalize::validate_address(&account_address).map_err(validation_error)?;

        let fees = self
            .client
            .user_fees(&account_address)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(fees))
    }

    /// Get staking summary for a user
    #[tool(description = "Fetch the staking summary for a specific user account")]
    pub async fn get_user_staking_summary(
        &self,
        params: Parameters<AddressParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let account_address = params.0.account_address;
        normalize::validate_address(&account_address).map_err(validation_error)?;

        let summary = self
            .client
            .user_staking_summary(&account_address)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(summary))
    }

    /// Get staking rewards history for a user
    #[tool(description = "Fetch the staking rewards history for a specific user account")]
    pub async fn get_user_staking_rewards(
        &self,
        params: Parameters<AddressParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let account_address = params.0.account_address;
        normalize::validate_address(&account_address).map_err(validation_error)?;

        let rewards = self
            .client
            .user_staking_rewards(&account_address)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(rewards))
    }

    /// Look up an order by exchange-assigned order id
    #[tool(description = "Fetch details of a specific order by its exchange-assigned order id (oid)")]
    pub async fn get_user_order_by_oid(
        &self,
        params: Parameters<OrderByOidParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let OrderByOidParams {
            account_address,
            oid,
        } = params.0;
        normalize::validate_address(&account_address).map_err(validation_error)?;

        let order = self
            .client
            .query_order_by_oid(&account_address, oid)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(order))
    }

    /// Look up an order by client-assigned order id
    #[tool(description = "Fetch details of a specific order by its client order id (cloid)")]
    pub async fn get_user_order_by_cloid(
        &self,
        params: Parameters<OrderByCloidParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let OrderByCloidParams {
            account_address,
            cloid,
        } = params.0;
        normalize::validate_address(&account_address).map_err(validation_error)?;
        if cloid.trim().is_empty() {
            return Err(validation_error(McpError::InvalidRequest(
                "Client order id must not be empty".to_string(),
            )));
        }

        let order = self
            .client
            .query_order_by_cloid(&account_address, &cloid)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(order))
    }

    /// Get sub-accounts for a master account
    #[tool(description = "Fetch the sub-accounts associated with a specific user account")]
    pub async fn get_user_sub_accounts(
        &self,
        params: Parameters<AddressParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let account_address = params.0.account_address;
        normalize::validate_address(&account_address).map_err(validation_error)?;

        let sub_accounts = self
            .client
            .query_sub_accounts(&account_address)
            .await
            .map_err(upstream_error)?;

        Ok(json_result(sub_accounts))
    }

    /// Health check for monitoring
    ///
    /// Purely local; requires no account address and makes no network call.
    #[tool(description = "Simple health check to verify the server is running")]
    pub async fn health_check(&self) -> Result<CallToolResult, ErrorData> {
        let status = json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "server": "Hyperliquid Info MCP",
            "upstream": self.client.base_url(),
        });

        Ok(json_result(status))
    }
}

/// ServerHandler trait implementation
///
/// Uses the #[tool_handler] macro to automatically wire the tool router
/// to the ServerHandler trait. Prompts are served manually.
#[tool_handler(router = self.tool_router)]
impl ServerHandler for HyperliquidServer {
    /// Returns server information and capabilities
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                prompts: Some(PromptsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "hyperliquid-info-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Hyperliquid Info MCP Server".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Read-only Hyperliquid exchange data over MCP. \
                Provides tools for account state, open orders, trade and funding history, \
                fees, staking, order lookup, market metadata, mid prices, order book \
                snapshots, and candles. No trading or account mutation."
                    .to_string(),
            ),
        }
    }

    /// Lists all available prompts
    async fn list_prompts(
        &self,
        _params: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult {
            prompts: crate::mcp::prompts::list_prompts(),
            next_cursor: None,
        })
    }

    /// Renders a prompt by name
    async fn get_prompt(
        &self,
        params: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        crate::mcp::prompts::get_prompt(&params)
    }
}
