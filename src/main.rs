//! cartscan - Multi-marketplace first-result price aggregation API
//!
//! Serves `/api/search`, scraping Amazon.in, Flipkart, and Myntra with TLS
//! fingerprint emulation for reliable fetching.

use anyhow::{Context, Result};
use cartscan::config::Config;
use cartscan::market::{HttpClient, ProductScraper};
use cartscan::server::{build_router, AppState};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cartscan",
    version,
    about = "Multi-marketplace first-result price aggregation API",
    long_about = "Aggregates the first search result from Amazon.in, Flipkart, and Myntra \
                  into one JSON response, with TLS fingerprint emulation for reliable fetching."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind on
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let fetcher = HttpClient::new().context("Failed to create HTTP client")?;
    let state = AppState { scraper: ProductScraper::new(Arc::new(fetcher)) };
    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind on {}", addr))?;

    info!("Server is running on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
