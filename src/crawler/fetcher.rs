//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent and timeouts
//! - Page cache lookups before any network call
//! - Rate limiting and retry with exponential backoff
//! - Error classification
//! - HEAD existence probes and package inventory fallback

use crate::config::{Config, FetcherConfig};
use crate::crawler::cache::PageCache;
use crate::url::{inventory_url, ELEMENT_LIST, PACKAGE_LIST};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Accept header sent with every request
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// Errors that can occur while fetching a page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// 4xx response; never retried
    #[error("HTTP {status} for {url}")]
    Client { url: String, status: u16 },

    /// 5xx response
    #[error("HTTP {status} (server error) for {url}")]
    Server { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    /// Connection, TLS or body transfer failure
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    /// Whether another attempt could succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Client { .. })
    }

    fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Network {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use javadoc_harvest::config::FetcherConfig;
/// use javadoc_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_millis(config.read_timeout_ms))
        .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page fetcher shared by every crawl in the process
pub struct Fetcher {
    client: Client,
    cache: Option<Arc<PageCache>>,
    config: FetcherConfig,
}

impl Fetcher {
    /// Creates a new fetcher
    ///
    /// # Arguments
    ///
    /// * `config` - The fetcher configuration
    /// * `cache` - Page cache to consult before the network, if caching is enabled
    pub fn new(config: FetcherConfig, cache: Option<Arc<PageCache>>) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config)?;
        Ok(Self {
            client,
            cache,
            config,
        })
    }

    /// Creates a fetcher from the full configuration, with a page cache
    /// when `[cache]` is enabled
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let cache = config
            .cache
            .enabled
            .then(|| Arc::new(PageCache::from_config(&config.cache)));
        Self::new(config.fetcher.clone(), cache)
    }

    /// Fetches a page body
    ///
    /// # Request Flow
    ///
    /// 1. Return the cached body if present and fresh
    /// 2. Wait the configured rate limit delay
    /// 3. Send GET, retrying retryable failures with exponential backoff
    /// 4. Cache the body on success
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | HTTP 4xx | Immediate → `FetchError::Client` |
    /// | HTTP 5xx | Retry → `FetchError::Server` |
    /// | Timeout | Retry → `FetchError::Timeout` |
    /// | Transport error | Retry → `FetchError::Network` |
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        if let Some(body) = self.cache.as_ref().and_then(|cache| cache.get(url)) {
            tracing::debug!("Cache hit: {}", url);
            return Ok(body);
        }

        if self.config.rate_limit_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.rate_limit_ms)).await;
        }

        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => {
                    if let Some(cache) = &self.cache {
                        cache.put(url, body.clone());
                    }
                    return Ok(body);
                }
                Err(error) if error.is_retryable() && attempt < self.config.max_retries => {
                    let delay = self.backoff_delay(attempt);
                    tracing::warn!(
                        "Fetch attempt {} failed ({}), retrying in {}ms",
                        attempt + 1,
                        error,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    tracing::warn!("Fetch failed: {}", error);
                    return Err(error);
                }
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if status.is_client_error() {
            return Err(FetchError::Client {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Server {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }

    /// Delay before retry number `attempt + 1`
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt);
        Duration::from_millis(self.config.retry_delay_ms.saturating_mul(factor))
    }

    /// Fetches a page, turning any failure into `None`
    pub async fn fetch_page_optional(&self, url: &str) -> Option<String> {
        match self.fetch_page(url).await {
            Ok(body) => Some(body),
            Err(error) => {
                tracing::debug!("Optional fetch of {} failed: {}", url, error);
                None
            }
        }
    }

    /// Probes a URL with HEAD; only a 2xx response counts as existing
    pub async fn exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                tracing::debug!("HEAD {} failed: {}", url, error);
                false
            }
        }
    }

    /// Fetches the package inventory of a documentation root
    ///
    /// Tries the modern `element-list` first and falls back to the legacy
    /// `package-list` on any failure.
    ///
    /// # Arguments
    ///
    /// * `base_url` - A normalized base URL (ending in `/`)
    pub async fn fetch_package_list(&self, base_url: &str) -> Result<String, FetchError> {
        match self.fetch_page(&inventory_url(base_url, ELEMENT_LIST)).await {
            Ok(body) => Ok(body),
            Err(error) => {
                tracing::debug!("{} unavailable ({}), trying {}", ELEMENT_LIST, error, PACKAGE_LIST);
                self.fetch_page(&inventory_url(base_url, PACKAGE_LIST)).await
            }
        }
    }

    /// Human-readable cache statistics
    pub fn cache_stats(&self) -> String {
        match &self.cache {
            Some(cache) => cache.stats().to_string(),
            None => "Cache disabled".to_string(),
        }
    }

    pub fn cache(&self) -> Option<&Arc<PageCache>> {
        self.cache.as_ref()
    }
}
