//! Edge request gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                  GATEWAY                     │
//!   Client Request       │  ┌──────────┐   ┌───────────┐                │
//!   ─────────────────────┼─▶│ request  │──▶│  routing  │                │
//!                        │  │ id/trace │   │ /api ?    │                │
//!                        │  └──────────┘   └─────┬─────┘                │
//!                        │            yes ┌──────┴──────┐ no            │
//!                        │                ▼             ▼               │
//!                        │         ┌────────────┐ ┌────────────┐        │
//!                        │         │  x-token   │ │   assets   │        │
//!                        │         │   check    │ │ + SPA index│        │
//!                        │         └─────┬──────┘ └────────────┘        │
//!                        │      POST ┌───┴───┐ GET                      │
//!                        │           ▼       ▼                          │
//!                        │     ┌─────────┐ ┌─────────┐                  │
//!                        │     │ backend │ │  demo   │──────────────────┼──▶ demo endpoint
//!                        │     │ forward │ │  fetch  │                  │
//!                        │     └────┬────┘ └─────────┘                  │
//!                        └──────────┼───────────────────────────────────┘
//!                                   └──────────────────────────────────────▶ BACKEND_URL
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edge_gateway::config::load_config;
use edge_gateway::lifecycle::{shutdown_on_signal, Shutdown};
use edge_gateway::observability::{logging, metrics};
use edge_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "edge-gateway")]
#[command(about = "Token-authenticated edge gateway with static asset fallback", long_about = None)]
struct Cli {
    /// TOML configuration file. BACKEND_URL and XTOKEN from the environment
    /// override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overriding listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Static asset directory, overriding assets.root.
    #[arg(short, long)]
    assets: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(root) = cli.assets {
        config.assets.root = Some(root);
    }

    logging::init(&config.observability.log_level);
    tracing::info!("edge-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        api_prefix = %config.api.prefix,
        response_mode = ?config.api.response_mode,
        method_policy = ?config.api.method_policy,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();
    let mut server_task = tokio::spawn(server.run(listener, server_shutdown));

    tokio::select! {
        _ = shutdown_on_signal(&shutdown) => {}
        result = &mut server_task => {
            result??;
            return Ok(());
        }
    }

    server_task.await??;
    tracing::info!("Shutdown complete");
    Ok(())
}
