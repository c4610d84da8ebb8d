//! Rate feed port.
//!
//! This trait defines the interface to the bank's published files.
//! Implementations can be HTTP clients, in-memory fixtures, etc.

use crate::domain::{IndexFile, RateTable, ResourceId};

/// Error type for feed operations.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Feed unavailable: {0}")]
    Unavailable(String),

    #[error("Cannot decode feed document: {0}")]
    Decode(String),
}

/// Port trait for the upstream rate feed.
///
/// Every call is a fresh fetch. Implementations must not retry.
#[async_trait::async_trait]
pub trait RateFeed: Send + Sync + 'static {
    /// Fetches the raw text of a yearly index.
    async fn fetch_index(&self, file: IndexFile) -> Result<String, FeedError>;

    /// Fetches and decodes one published table.
    async fn fetch_table(&self, id: &ResourceId) -> Result<RateTable, FeedError>;
}
