//! Configuration loading from environment.

use std::env;

use nbp_feed::FeedConfig;
use nbp_hex::DEFAULT_MAX_FALLBACK_DAYS;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub feed: FeedConfig,
    pub max_fallback_days: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let max_fallback_days = match env::var("NBP_MAX_FALLBACK_DAYS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("NBP_MAX_FALLBACK_DAYS must be a whole number"))?,
            Err(_) => DEFAULT_MAX_FALLBACK_DAYS,
        };

        Ok(Self {
            port,
            feed: FeedConfig::from_env()?,
            max_fallback_days,
        })
    }
}
