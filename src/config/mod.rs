//! Configuration Management
//!
//! Environment-driven configuration for network binding and the upstream API
//! base URL. Everything here is plumbing; no value affects query semantics.

use crate::hyperliquid::MAINNET_API_URL;
use std::net::{SocketAddr, ToSocketAddrs};

/// Server configuration loaded from the environment
///
/// ## Environment Variables
///
/// - `HOST`: bind address for network transports (default: 0.0.0.0)
/// - `PORT`: port for network transports (default: 8000)
/// - `HYPERLIQUID_API_URL`: upstream info API root (default: mainnet)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address for the SSE transport
    pub addr: SocketAddr,

    /// Upstream Hyperliquid API root
    pub api_url: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if PORT is not a valid port number or HOST does not
    /// parse as an IP address and does not resolve as a hostname.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()?;

        let api_url =
            std::env::var("HYPERLIQUID_API_URL").unwrap_or_else(|_| MAINNET_API_URL.to_string());

        Ok(Self {
            addr: resolve_bind_addr(&host, port)?,
            api_url,
        })
    }

    /// Same as [`from_env`](Self::from_env) but with an explicit port override
    /// taking precedence over the PORT variable.
    pub fn from_env_with_port(port: u16) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::from_env()?;
        config.addr.set_port(port);
        Ok(config)
    }
}

/// Resolves a bind address from a host string and port
///
/// Accepts IP literals directly and falls back to hostname resolution
/// (e.g., HOST=localhost), taking the first resolved address.
fn resolve_bind_addr(host: &str, port: u16) -> Result<SocketAddr, Box<dyn std::error::Error>> {
    if let Ok(ip) = host.parse() {
        return Ok(SocketAddr::new(ip, port));
    }
    (host, port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| format!("Host '{}' did not resolve to any address", host).into())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            api_url: MAINNET_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.to_string(), "0.0.0.0:8000");
        assert_eq!(config.api_url, MAINNET_API_URL);
    }

    #[test]
    fn test_ip_literals_bind_directly() {
        assert_eq!(
            resolve_bind_addr("127.0.0.1", 8000).unwrap().to_string(),
            "127.0.0.1:8000"
        );
        assert_eq!(resolve_bind_addr("::1", 9000).unwrap().port(), 9000);
    }

    #[test]
    fn test_hostnames_resolve() {
        let addr = resolve_bind_addr("localhost", 8000).unwrap();
        assert_eq!(addr.port(), 8000);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_unresolvable_host_errors() {
        assert!(resolve_bind_addr("no-such-host.invalid", 8000).is_err());
    }
}
