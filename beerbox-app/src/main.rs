//! # Beerbox Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the product store and rate provider adapters
//! - Create the pricing service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beerbox_hex::{PricingService, inbound::HttpServer};
use beerbox_repo::build_repo;
use exchange_rates::ProviderFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,beerbox_app=debug,beerbox_hex=debug,exchange_rates=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting beerbox server on port {}", config.port);

    // Build product store (handles connection and migration)
    let repo = build_repo(config.product_storage, config.database_url.as_deref()).await?;
    tracing::info!("Using {} product store", repo.describe());

    // Build rate provider, optionally behind a cache
    let factory = ProviderFactory::new(config.rate_settings());
    let rates = match config.rate_cache {
        Some(cache) => factory.build_cached(config.rate_provider, cache).await?,
        None => factory.build(config.rate_provider).await?,
    };
    tracing::info!(
        ttl_secs = config.rate_cache_ttl.as_secs(),
        "Using {} rate provider",
        rates.describe()
    );

    // Create the pricing service
    let service = PricingService::new(repo, rates);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
