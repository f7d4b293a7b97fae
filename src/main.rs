//! Product API server entry point.

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use product_api::api::{create_router, AppState};
use product_api::config::Config;
use product_api::metrics;
use product_api::store::ProductStore;
use product_api::utils::shutdown_signal;

/// In-memory product catalog CRUD API.
#[derive(Parser, Debug)]
#[command(name = "product-api")]
#[command(about = "HTTP CRUD API over an in-memory product catalog")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Listen port (overrides the PORT environment variable).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("product_api=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load and check configuration
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize metrics
    let metrics_handle = metrics::install_recorder()?;
    metrics::init_metrics();

    let store = if config.seed_data {
        ProductStore::seeded()
    } else {
        ProductStore::new()
    };
    let product_count = store.len().await;
    info!(products = product_count, "store initialized");

    if config.auth_enabled() {
        info!("api key auth enabled for /api routes");
    }

    let state = AppState::new(store)
        .with_api_key(config.api_key.clone())
        .with_metrics(metrics_handle);
    let app = create_router(state);

    let port = args.port.unwrap_or(config.port);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("product api shutdown complete");
    Ok(())
}
