//! Response shaping for metadata queries.
//!
//! The exchange's combined metadata endpoints return `[meta, assetCtxs]`.
//! When the caller did not ask for asset contexts the payload is reduced to
//! the bare metadata object. Pure transformations, no side effects.

use serde_json::Value;

/// Strips asset contexts from a metadata payload
///
/// If `value` is the combined `[meta, assetCtxs]` array, returns the metadata
/// element alone; any other shape passes through unchanged. Guarantees the
/// reduced path can never leak asset contexts regardless of which upstream
/// endpoint produced the payload.
pub fn meta_without_asset_ctxs(value: Value) -> Value {
    match value {
        Value::Array(mut parts) if parts.len() == 2 && parts[0].is_object() => {
            parts.swap_remove(0)
        }
        other => other,
    }
}
