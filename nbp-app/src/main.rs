//! # NBP Rates Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the feed adapter
//! - Create the query service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nbp_feed::build_feed;
use nbp_hex::{QueryService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,nbp_app=debug,nbp_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;

    tracing::info!("Starting rates server on port {}", config.port);
    tracing::info!(
        "Using feed: {} (timeout {:?}, fallback {} days)",
        config.feed.base_url,
        config.feed.timeout,
        config.max_fallback_days
    );

    let feed = build_feed(&config.feed)?;

    let service = QueryService::new(feed).with_max_fallback_days(config.max_fallback_days);

    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
