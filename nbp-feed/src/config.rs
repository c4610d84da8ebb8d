//! Feed configuration loading from environment.

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://www.nbp.pl/kursy/xml/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the feed lives and how long a single fetch may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Always ends with `/`.
    pub base_url: String,
    pub timeout: Duration,
}

impl FeedConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url, timeout }
    }

    /// Loads `NBP_BASE_URL` and `NBP_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = env::var("NBP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var("NBP_TIMEOUT_SECS") {
            Ok(raw) => Self::parse_timeout(&raw)?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self::new(base_url, timeout))
    }

    pub fn parse_timeout(raw: &str) -> anyhow::Result<Duration> {
        let secs: u64 = raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("NBP_TIMEOUT_SECS must be a whole number of seconds"))?;
        if secs == 0 {
            anyhow::bail!("NBP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(Duration::from_secs(secs))
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}
