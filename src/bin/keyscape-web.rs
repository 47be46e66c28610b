//! Keyscape Web Server Binary
//!
//! This binary serves one keyword landscape over a REST API for a browser
//! frontend.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, configured asset root)
//! keyscape-web
//!
//! # Specify port and asset root
//! keyscape-web --port 8080 --assets ./assets/img
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keyscape::config::Config;
use keyscape::web;

/// Keyscape Web Server - REST API for the landscape frontend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Asset root (overrides the configured one)
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Project keyword file (overrides the configured one)
    #[arg(long)]
    projects: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load()?;
    if let Some(assets) = args.assets {
        config.paths.assets = assets;
    }
    if let Some(projects) = args.projects {
        config.paths.projects = Some(projects);
    }

    info!("Asset root: {}", config.paths.assets.display());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    web::run_server(config, addr).await
}
