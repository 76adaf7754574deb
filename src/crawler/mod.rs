//! Crawler module for fetching and storing Javadoc sites
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with caching, rate limiting and retry
//! - The page cache shared between crawls
//! - Crawl orchestration and its result counters

mod cache;
mod coordinator;
mod fetcher;
mod result;

pub use cache::{CacheStats, PageCache};
pub use coordinator::{parse_package_list, Crawler, NO_PACKAGES_ERROR};
pub use fetcher::{build_http_client, FetchError, Fetcher};
pub use result::{CrawlResult, MAX_RECORDED_ERRORS};

use crate::config::Config;
use crate::storage::Storage;
use crate::Result;
use std::sync::{Arc, Mutex};

/// Runs a complete crawl with a freshly built fetcher
///
/// This is the one-shot entry point. Callers running several crawls at once
/// should build one [`Fetcher`] and share it between [`Crawler`]s instead.
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `storage` - Storage the crawl writes into
/// * `base_url` - Documentation root URL
/// * `library` - Library name
/// * `version` - Library version
pub async fn crawl<S: Storage>(
    config: &Config,
    storage: Arc<Mutex<S>>,
    base_url: &str,
    library: &str,
    version: &str,
) -> Result<CrawlResult> {
    let fetcher = Arc::new(Fetcher::from_config(config)?);

    Crawler::new(fetcher, storage, config.crawler.clone())
        .crawl(base_url, library, version)
        .await
}
