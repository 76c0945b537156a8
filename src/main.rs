//! Edge responder.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ axum (request ID, trace)
//!                         │
//!                         ▼
//!                     Responder ── not GET/HEAD ──▶ 405
//!                         │
//!                         ├── /api/health ──────────▶ 200 JSON
//!                         │
//!                         ▼
//!                     AssetResolver (ServeDir) ── 404 ──▶ friendly 404 page
//!                         │
//!                         ▼
//!                     harden (security headers)
//!     Client Response     │
//!     ◀───────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edge_responder::config::{self, ConfigError, ResponderConfig};
use edge_responder::lifecycle::{wait_for_signal, Shutdown};
use edge_responder::observability::{logging, metrics};
use edge_responder::HttpServer;

#[derive(Parser)]
#[command(name = "edge-responder")]
#[command(about = "Serve static assets with hardened security headers", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override assets.root.
    #[arg(short, long)]
    root: Option<PathBuf>,
}

fn load(cli: &Cli) -> Result<ResponderConfig, ConfigError> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ResponderConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        cfg.listener.bind_address = bind.clone();
    }
    if let Some(root) = &cli.root {
        cfg.assets.root = root.clone();
    }

    config::validate_config(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    logging::init_logging(&config.observability);

    tracing::info!("edge-responder v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        asset_root = %config.assets.root.display(),
        html_extension_fallback = config.assets.html_extension_fallback,
        precompressed = config.assets.precompressed,
        "Configuration loaded"
    );

    if !config.assets.root.is_dir() {
        tracing::warn!(
            asset_root = %config.assets.root.display(),
            "Asset root is not a directory; every asset request will 404"
        );
    }

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let signal = wait_for_signal().await;
        tracing::info!(signal, "Stopping");
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
