use clap::Parser;
use relay_dns_application::use_cases::ForwardQuery;
use relay_dns_domain::CliOverrides;
use relay_dns_infrastructure::handler::DatagramHandler;
use relay_dns_infrastructure::upstream::UdpUpstream;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "relay-dns")]
#[command(version = "0.1.0")]
#[command(about = "Forwarding DNS server - fans multi-question queries out to an upstream resolver")]
struct Cli {
    /// Upstream resolver address (host:port)
    #[arg(short, long)]
    resolver: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// UDP listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        resolver: cli.resolver,
        port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting relay-dns v{}", env!("CARGO_PKG_VERSION"));

    let resolver_addr = config.upstream.resolver_addr()?;
    let upstream = Arc::new(UdpUpstream::new(
        resolver_addr,
        Duration::from_millis(config.upstream.timeout_ms),
    ));
    let handler = DatagramHandler::new(ForwardQuery::new(upstream));

    let listen_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;

    info!(listen = %listen_addr, resolver = %resolver_addr, "configuration loaded");

    server::serve(listen_addr, handler).await
}
