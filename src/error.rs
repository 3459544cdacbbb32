//! Error types for the Hyperliquid info MCP server.
//!
//! Every failure is classified before it reaches the tool boundary so the
//! handler can report validation errors and upstream errors distinctly.

use thiserror::Error;

/// Main error type for the Hyperliquid info server
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl McpError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            McpError::ConnectionError(_) | McpError::RateLimitError(_)
        )
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            McpError::ConnectionError(_) => "connection_error",
            McpError::RateLimitError(_) => "rate_limit",
            McpError::ParseError(_) => "parse_error",
            McpError::InvalidRequest(_) => "invalid_request",
            McpError::InternalError(_) => "internal_error",
        }
    }

    /// True for validation failures that are reported before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, McpError::InvalidRequest(_))
    }
}

impl From<reqwest::Error> for McpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            McpError::ConnectionError(
                "Request to Hyperliquid API timed out. Please check your internet connection."
                    .to_string(),
            )
        } else if err.is_connect() {
            McpError::ConnectionError(
                "Failed to connect to Hyperliquid API. Please check your internet connection."
                    .to_string(),
            )
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => McpError::RateLimitError(
                    "Too many requests to Hyperliquid API. Retry after 60 seconds.".to_string(),
                ),
                400..=499 => McpError::InvalidRequest(format!(
                    "Hyperliquid API rejected the request (HTTP {}).",
                    status.as_u16()
                )),
                500..=599 => McpError::ConnectionError(format!(
                    "Hyperliquid server error (HTTP {}). Please try again later.",
                    status.as_u16()
                )),
                _ => McpError::InternalError(format!("HTTP error: {}", status)),
            }
        } else {
            McpError::InternalError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for McpError {
    fn from(err: serde_json::Error) -> Self {
        McpError::ParseError(format!("JSON parsing failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_labels() {
        assert_eq!(
            McpError::ConnectionError("x".into()).error_type(),
            "connection_error"
        );
        assert_eq!(
            McpError::InvalidRequest("x".into()).error_type(),
            "invalid_request"
        );
        assert_eq!(
            McpError::RateLimitError("x".into()).error_type(),
            "rate_limit"
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(McpError::ConnectionError("x".into()).is_retryable());
        assert!(McpError::RateLimitError("x".into()).is_retryable());
        assert!(!McpError::InvalidRequest("x".into()).is_retryable());
        assert!(!McpError::ParseError("x".into()).is_retryable());
    }

    #[test]
    fn test_validation_classification() {
        assert!(McpError::InvalidRequest("bad interval".into()).is_validation());
        assert!(!McpError::InternalError("boom".into()).is_validation());
    }
}
