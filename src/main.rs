use hyperliquid_info_mcp::config::ServerConfig;
use hyperliquid_info_mcp::hyperliquid::InfoClient;
use hyperliquid_info_mcp::mcp::HyperliquidServer;
use hyperliquid_info_mcp::transport::TransportMode;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first to determine mode
    let args: Vec<String> = std::env::args().collect();
    let (mode, port_override) = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        print_usage();
        std::process::exit(1);
    });

    // Initialize tracing/logging.
    // Stdout is reserved for the MCP protocol in stdio mode, so logs always
    // go to stderr.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Hyperliquid info MCP server in {} mode...", mode);

    let config = match port_override {
        Some(port) => ServerConfig::from_env_with_port(port)?,
        None => ServerConfig::from_env()?,
    };

    let server = HyperliquidServer::with_client(InfoClient::with_base_url(&config.api_url));

    match mode {
        TransportMode::Stdio => {
            hyperliquid_info_mcp::transport::stdio::run_stdio_server(server).await?
        }
        TransportMode::Sse => run_sse_server(server, &config).await?,
    }

    Ok(())
}

/// Parse command-line arguments
///
/// Returns an error for unknown arguments, flags missing their value, and
/// values that do not parse; the caller prints usage and exits.
fn parse_args(args: &[String]) -> Result<(TransportMode, Option<u16>), String> {
    let mut mode = TransportMode::Stdio;
    let mut port = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--mode requires a value: stdio or sse".to_string())?;
                mode = value.parse()?;
                i += 1;
            }
            "--stdio" => mode = TransportMode::Stdio,
            "--sse" => mode = TransportMode::Sse,
            "--port" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--port requires a port number".to_string())?;
                port = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid port: {}", value))?,
                );
                i += 1;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok((mode, port))
}

/// Print usage information
fn print_usage() {
    println!("hyperliquid-info-mcp - MCP server for read-only Hyperliquid exchange data");
    println!();
    println!("USAGE:");
    println!("    hyperliquid-info-mcp [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --mode <MODE>       Transport mode: stdio or sse (default: stdio)");
    println!("    --stdio             Run in stdio MCP mode (shortcut for --mode stdio)");
    println!("    --sse               Run in SSE mode (shortcut for --mode sse)");
    println!("    --port <PORT>       Port to listen on in SSE mode (overrides PORT env var)");
    println!("    --help, -h          Print this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    HOST                   Bind address for SSE mode (default: 0.0.0.0)");
    println!("    PORT                   Port for SSE mode (default: 8000)");
    println!("    HYPERLIQUID_API_URL    Upstream info API root (default: https://api.hyperliquid.xyz)");
    println!("    RUST_LOG               Logging level (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("    # Start in stdio mode (Claude Desktop and other local MCP clients)");
    println!("    hyperliquid-info-mcp --stdio");
    println!();
    println!("    # Start SSE server on the default port (8000)");
    println!("    hyperliquid-info-mcp --sse");
    println!();
    println!("    # Start SSE server on a custom port against testnet");
    println!("    HYPERLIQUID_API_URL=https://api.hyperliquid-testnet.xyz \\");
    println!("        hyperliquid-info-mcp --sse --port 8080");
}

/// Run the server in SSE mode (Server-Sent Events)
async fn run_sse_server(
    server: HyperliquidServer,
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    use hyperliquid_info_mcp::transport::sse::{CancellationToken, SseServer, SseServerConfig};

    tracing::info!("Starting SSE server on {}", config.addr);

    let sse_config = SseServerConfig {
        bind: config.addr,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: CancellationToken::new(),
        sse_keep_alive: None,
    };

    let sse_server = SseServer::serve_with_config(sse_config).await?;
    tracing::info!("SSE server ready on {}", config.addr);
    tracing::info!("  SSE endpoint: http://{}/sse", config.addr);
    tracing::info!("  POST endpoint: http://{}/message", config.addr);

    // Attach MCP service
    let shutdown_ct = sse_server.with_service(move || server.clone());

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    tracing::info!("Received shutdown signal (Ctrl+C)");
    shutdown_ct.cancel();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(rest: &[&str]) -> Vec<String> {
        std::iter::once("hyperliquid-info-mcp")
            .chain(rest.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults_to_stdio() {
        let (mode, port) = parse_args(&args(&[])).unwrap();
        assert_eq!(mode, TransportMode::Stdio);
        assert!(port.is_none());
    }

    #[test]
    fn test_mode_and_port_parsed() {
        let (mode, port) = parse_args(&args(&["--mode", "sse", "--port", "8080"])).unwrap();
        assert_eq!(mode, TransportMode::Sse);
        assert_eq!(port, Some(8080));

        let (mode, _) = parse_args(&args(&["--sse"])).unwrap();
        assert_eq!(mode, TransportMode::Sse);
    }

    #[test]
    fn test_trailing_flag_without_value_errors() {
        assert!(parse_args(&args(&["--mode"])).is_err());
        assert!(parse_args(&args(&["--sse", "--port"])).is_err());
    }

    #[test]
    fn test_bad_values_error() {
        let err = parse_args(&args(&["--port", "notaport"])).unwrap_err();
        assert!(err.contains("notaport"));

        assert!(parse_args(&args(&["--mode", "grpc"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
