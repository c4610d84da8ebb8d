//! HTTP feed adapter.

use async_trait::async_trait;
use reqwest::Client;

use nbp_types::{FeedError, IndexFile, RateFeed, RateTable, ResourceId};

use crate::config::FeedConfig;
use crate::decode::decode_table;

// ─────────────────────────────────────────────────────────────────────────────
// HTTP Feed
// ─────────────────────────────────────────────────────────────────────────────

/// `RateFeed` backed by the bank's static file server.
///
/// The inner client owns the connection pool; the feed itself holds no state
/// between calls.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    base_url: String,
    http: Client,
}

impl HttpFeed {
    /// Creates a feed whose every request is bounded by `config.timeout`.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("nbp-rates/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FeedError::Unavailable(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, file_name: &str) -> String {
        format!("{}{}", self.base_url, file_name)
    }

    async fn get_bytes(&self, file_name: &str) -> Result<Vec<u8>, FeedError> {
        let url = self.url(file_name);
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport_error)?;

        let body = resp.bytes().await.map_err(transport_error)?;
        Ok(body.to_vec())
    }
}

fn transport_error(err: reqwest::Error) -> FeedError {
    if err.is_timeout() {
        FeedError::Unavailable(format!("request timed out: {}", err))
    } else {
        FeedError::Unavailable(err.to_string())
    }
}

#[async_trait]
impl RateFeed for HttpFeed {
    #[tracing::instrument(skip_all, fields(file = %file))]
    async fn fetch_index(&self, file: IndexFile) -> Result<String, FeedError> {
        let body = self.get_bytes(&file.file_name()).await?;
        // Index entries are plain ASCII.
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    #[tracing::instrument(skip_all, fields(resource = %id))]
    async fn fetch_table(&self, id: &ResourceId) -> Result<RateTable, FeedError> {
        let body = self.get_bytes(&id.document_name()).await?;
        decode_table(&body)
    }
}
