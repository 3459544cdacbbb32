//! Hyperliquid Info API Wire Types
//!
//! Every query against the info endpoint is a POST of a tagged JSON body
//! (`{"type": "clearinghouseState", "user": "0x..."}`). The request side is
//! typed; responses are treated as an external, versioned contract and kept
//! as opaque `serde_json::Value`.

use serde::Serialize;

/// Candle intervals the exchange accepts for `candleSnapshot` queries
pub const ALLOWED_INTERVALS: &[&str] = &[
    "1m", "3m", "5m", "15m", "30m", "1h", "2h", "4h", "8h", "12h", "1d", "3d", "1w", "1M",
];

/// Request body for the `/info` endpoint
///
/// Serializes to the exchange's tagged wire format, e.g.
///
/// ```json
/// {"type": "fundingHistory", "coin": "BTC", "startTime": 1735689600000, "endTime": 1735776000000}
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum InfoRequest {
    /// Perpetuals account state: positions, margin summary, withdrawable balance
    ClearinghouseState { user: String },
    /// Spot account state: token balances
    SpotClearinghouseState { user: String },
    /// All resting orders for a user
    OpenOrders { user: String },
    /// Trade fill history for a user
    UserFills { user: String },
    /// Mid prices for every actively traded pair
    AllMids,
    /// Perpetuals universe metadata
    Meta,
    /// Perpetuals metadata plus per-asset contexts (mark price, funding, open interest)
    MetaAndAssetCtxs,
    /// Spot universe metadata
    SpotMeta,
    /// Spot metadata plus per-asset contexts
    SpotMetaAndAssetCtxs,
    /// Funding rate history for a coin over a time range
    FundingHistory {
        coin: String,
        start_time: i64,
        end_time: i64,
    },
    /// Funding payments charged/credited to a user over a time range
    UserFunding {
        user: String,
        start_time: i64,
        end_time: i64,
    },
    /// L2 order book snapshot for a coin
    L2Book { coin: String },
    /// Candlestick snapshot; the exchange nests the parameters under `req`
    CandleSnapshot { req: CandleSnapshotRequest },
    /// Fee schedule and rates for a user
    UserFees { user: String },
    /// Staking (delegation) summary for a user
    DelegatorSummary { user: String },
    /// Staking reward history for a user
    DelegatorRewards { user: String },
    /// Single order lookup by exchange oid or client-assigned cloid
    OrderStatus { user: String, oid: OrderId },
    /// Sub-accounts owned by a master account
    SubAccounts { user: String },
}

/// Inner body of a `candleSnapshot` request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleSnapshotRequest {
    pub coin: String,
    pub interval: String,
    pub start_time: i64,
    pub end_time: i64,
}

/// Order identifier accepted by `orderStatus`
///
/// The exchange overloads the `oid` field: a JSON number is the
/// exchange-assigned order id, a JSON string is the client order id (cloid).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OrderId {
    Oid(u64),
    Cloid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_request_wire_format() {
        let req = InfoRequest::ClearinghouseState {
            user: "0xcd5051944f780a621ee62e39e493c489668acf4d".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "type": "clearinghouseState",
                "user": "0xcd5051944f780a621ee62e39e493c489668acf4d"
            })
        );
    }

    #[test]
    fn test_unit_request_wire_format() {
        assert_eq!(
            serde_json::to_value(InfoRequest::AllMids).unwrap(),
            json!({"type": "allMids"})
        );
        assert_eq!(
            serde_json::to_value(InfoRequest::MetaAndAssetCtxs).unwrap(),
            json!({"type": "metaAndAssetCtxs"})
        );
    }

    #[test]
    fn test_time_range_fields_are_camel_case() {
        let req = InfoRequest::FundingHistory {
            coin: "BTC".to_string(),
            start_time: 1735689600000,
            end_time: 1735776000000,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "type": "fundingHistory",
                "coin": "BTC",
                "startTime": 1735689600000i64,
                "endTime": 1735776000000i64
            })
        );
    }

    #[test]
    fn test_candle_snapshot_nests_req() {
        let req = InfoRequest::CandleSnapshot {
            req: CandleSnapshotRequest {
                coin: "ETH".to_string(),
                interval: "1h".to_string(),
                start_time: 1,
                end_time: 2,
            },
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "type": "candleSnapshot",
                "req": {"coin": "ETH", "interval": "1h", "startTime": 1, "endTime": 2}
            })
        );
    }

    #[test]
    fn test_order_status_oid_variants() {
        let by_oid = InfoRequest::OrderStatus {
            user: "0x0000000000000000000000000000000000000000".to_string(),
            oid: OrderId::Oid(12345),
        };
        let value = serde_json::to_value(&by_oid).unwrap();
        assert_eq!(value["oid"], json!(12345));

        let by_cloid = InfoRequest::OrderStatus {
            user: "0x0000000000000000000000000000000000000000".to_string(),
            oid: OrderId::Cloid("0x1234abcd".to_string()),
        };
        let value = serde_json::to_value(&by_cloid).unwrap();
        assert_eq!(value["oid"], json!("0x1234abcd"));
    }

    #[test]
    fn test_sub_accounts_wire_field_is_user() {
        let req = InfoRequest::SubAccounts {
            user: "0x0000000000000000000000000000000000000000".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "subAccounts",
                "user": "0x0000000000000000000000000000000000000000"
            })
        );
        // The exchange keys the address as "user"; anything else is ignored upstream
        assert!(value.get("subAccountUser").is_none());
    }
}
