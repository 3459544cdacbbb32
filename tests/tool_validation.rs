//! Tool-boundary tests: validation must fail before any network call, and
//! upstream failures must surface as structured errors.
//!
//! The server under test points at a non-routable address, so any test that
//! passes validation and reaches the network gets an immediate connection
//! error rather than a live response.

use hyperliquid_info_mcp::hyperliquid::InfoClient;
use hyperliquid_info_mcp::mcp::types::{
    AddressParams, CandlesParams, CoinTimeRangeParams, MetadataParams, OrderByCloidParams,
    UserStateParams, UserTimeRangeParams,
};
use hyperliquid_info_mcp::mcp::HyperliquidServer;
use hyperliquid_info_mcp::normalize::TimeInput;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;

const VALID_ADDR: &str = "0xcd5051944f780a621ee62e39e493c489668acf4d";

/// Server whose upstream is unreachable; validation errors must trigger
/// before the address is ever dialed.
fn dead_end_server() -> HyperliquidServer {
    HyperliquidServer::with_client(InfoClient::with_base_url("http://127.0.0.1:9"))
}

#[tokio::test]
async fn health_check_needs_no_address_and_no_network() {
    let server = dead_end_server();

    let result = server.health_check().await.expect("health check failed");
    let rendered = serde_json::to_string(&result).unwrap();
    assert!(rendered.contains("healthy"));
    assert!(rendered.contains("timestamp"));
}

#[tokio::test]
async fn empty_address_fails_validation() {
    let server = dead_end_server();

    let err = server
        .get_user_state(Parameters(UserStateParams {
            account_address: String::new(),
            check_spot: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("empty"));
}

#[tokio::test]
async fn malformed_address_fails_validation_on_every_user_tool() {
    let server = dead_end_server();
    let bad = "definitely-not-an-address".to_string();

    let err = server
        .get_user_open_orders(Parameters(AddressParams {
            account_address: bad.clone(),
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

    let err = server
        .get_user_fees(Parameters(AddressParams {
            account_address: bad.clone(),
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

    let err = server
        .get_user_staking_summary(Parameters(AddressParams {
            account_address: bad,
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn malformed_time_string_fails_before_network() {
    let server = dead_end_server();

    let err = server
        .get_user_funding_history(Parameters(UserTimeRangeParams {
            account_address: VALID_ADDR.to_string(),
            start_time: TimeInput::Iso("not-a-date".to_string()),
            end_time: TimeInput::Iso("2025-12-31T23:59:59Z".to_string()),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("not-a-date"));
}

#[tokio::test]
async fn inverted_time_range_fails_validation() {
    let server = dead_end_server();

    let err = server
        .get_coin_funding_history(Parameters(CoinTimeRangeParams {
            coin_name: "BTC".to_string(),
            start_time: TimeInput::Iso("2025-12-31T23:59:59Z".to_string()),
            end_time: TimeInput::Iso("2025-01-01T00:00:00Z".to_string()),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn unrecognized_interval_fails_validation() {
    let server = dead_end_server();

    let err = server
        .get_candles_snapshot(Parameters(CandlesParams {
            coin_name: "BTC".to_string(),
            interval: "42s".to_string(),
            start_time: TimeInput::Millis(1735689600000),
            end_time: TimeInput::Millis(1735776000000),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("42s"));
}

#[tokio::test]
async fn empty_cloid_fails_validation() {
    let server = dead_end_server();

    let err = server
        .get_user_order_by_cloid(Parameters(OrderByCloidParams {
            account_address: VALID_ADDR.to_string(),
            cloid: "  ".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn upstream_failure_surfaces_as_structured_error() {
    let server = dead_end_server();

    // No parameters to validate, so this goes straight to the dead upstream.
    let err = server.get_all_mids().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);

    // Valid parameters; the failure is the connection, not validation.
    let err = server
        .get_perp_metadata(Parameters(MetadataParams {
            include_asset_ctxs: Some(false),
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
}
