//! # NBP Feed
//!
//! Outbound adapter for the bank's published rate files.
//! This crate provides the HTTP implementation of the `RateFeed` port and the
//! decoder for the table documents.

mod config;
pub mod decode;
mod http;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FeedConfig};
pub use decode::decode_table;
pub use http::HttpFeed;

/// Build an HTTP feed from configuration.
///
/// # Examples
///
/// ```ignore
/// let feed = build_feed(&FeedConfig::from_env()?)?;
/// let index = feed.fetch_index(IndexFile::Current).await?;
/// ```
pub fn build_feed(config: &FeedConfig) -> anyhow::Result<HttpFeed> {
    Ok(HttpFeed::new(config)?)
}
