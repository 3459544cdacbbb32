//! Parameter normalization and validation.
//!
//! Everything here runs before any network call: time strings are converted
//! to epoch milliseconds, enum-like parameters are checked against the values
//! the exchange accepts, and bad input fails the call with a descriptive
//! error instead of a silent default.

use crate::error::McpError;
use crate::hyperliquid::ALLOWED_INTERVALS;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A caller-supplied point in time
///
/// Agents pass either an ISO 8601 string or an already-numeric
/// epoch-millisecond timestamp; both normalize to epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TimeInput {
    /// Epoch milliseconds, passed through unchanged
    Millis(i64),
    /// ISO 8601 timestamp, e.g. "2025-01-01T00:00:00Z"
    Iso(String),
}

/// Converts a [`TimeInput`] to epoch milliseconds
///
/// Accepts RFC 3339 timestamps with any offset, naive timestamps, and bare
/// dates; naive values are interpreted as UTC. Parse failures are reported
/// as validation errors and never reach the network.
pub fn to_epoch_millis(value: &TimeInput) -> Result<i64, McpError> {
    match value {
        TimeInput::Millis(ms) => {
            if *ms < 0 {
                return Err(McpError::InvalidRequest(format!(
                    "Timestamp must be non-negative epoch milliseconds, got {}",
                    ms
                )));
            }
            Ok(*ms)
        }
        TimeInput::Iso(s) => {
            let ms = parse_iso8601_millis(s)?;
            if ms < 0 {
                return Err(McpError::InvalidRequest(format!(
                    "Timestamp '{}' precedes the Unix epoch",
                    s
                )));
            }
            Ok(ms)
        }
    }
}

fn parse_iso8601_millis(s: &str) -> Result<i64, McpError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }
    // Naive forms the RFC 3339 parser rejects; interpreted as UTC
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            McpError::InvalidRequest(format!("Invalid date '{}'", s))
        })?;
        return Ok(midnight.and_utc().timestamp_millis());
    }
    Err(McpError::InvalidRequest(format!(
        "Invalid ISO 8601 timestamp '{}' (expected e.g. '2025-01-01T00:00:00Z')",
        s
    )))
}

/// Normalizes a start/end pair and checks ordering
pub fn to_epoch_range(start: &TimeInput, end: &TimeInput) -> Result<(i64, i64), McpError> {
    let start_ms = to_epoch_millis(start)?;
    let end_ms = to_epoch_millis(end)?;
    if end_ms < start_ms {
        return Err(McpError::InvalidRequest(format!(
            "end_time ({}) precedes start_time ({})",
            end_ms, start_ms
        )));
    }
    Ok((start_ms, end_ms))
}

/// Validates a candle interval against the set the exchange accepts
pub fn validate_interval(interval: &str) -> Result<(), McpError> {
    if ALLOWED_INTERVALS.contains(&interval) {
        Ok(())
    } else {
        Err(McpError::InvalidRequest(format!(
            "Unrecognized candle interval '{}'. Valid intervals: {}",
            interval,
            ALLOWED_INTERVALS.join(", ")
        )))
    }
}

/// Validates an account address: 0x-prefixed, 40 hex digits
pub fn validate_address(address: &str) -> Result<(), McpError> {
    if address.is_empty() {
        return Err(McpError::InvalidRequest(
            "Account address must not be empty".to_string(),
        ));
    }
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"));
    match hex_part {
        Some(hex) if hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()) => Ok(()),
        _ => Err(McpError::InvalidRequest(format!(
            "Malformed account address '{}' (expected 0x followed by 40 hex digits)",
            address
        ))),
    }
}

/// Validates a coin symbol is present and plausible
pub fn validate_coin(coin: &str) -> Result<(), McpError> {
    if coin.trim().is_empty() {
        return Err(McpError::InvalidRequest(
            "Coin symbol must not be empty".to_string(),
        ));
    }
    Ok(())
}
