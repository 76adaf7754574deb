use serde::Deserialize;

/// Main configuration structure for Javadoc-Harvest
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetching behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Delay applied before each network request (milliseconds)
    #[serde(rename = "rate-limit-ms")]
    pub rate_limit_ms: u64,

    /// TCP connect timeout (milliseconds)
    #[serde(rename = "connect-timeout-ms")]
    pub connect_timeout_ms: u64,

    /// Whole-request read timeout (milliseconds)
    #[serde(rename = "read-timeout-ms")]
    pub read_timeout_ms: u64,

    /// Number of retries after the first attempt
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Base delay for exponential backoff (milliseconds)
    #[serde(rename = "retry-delay-ms")]
    pub retry_delay_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (compatible; javadoc-harvest/1.0; Javadoc-Crawler)".to_string(),
            rate_limit_ms: 500,
            connect_timeout_ms: 10_000,
            read_timeout_ms: 30_000,
            max_retries: 3,
            retry_delay_ms: 1_000,
        }
    }
}

/// Page cache configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,

    /// Time-to-live of a cached page, measured from insertion
    #[serde(rename = "ttl-seconds")]
    pub ttl_seconds: u64,

    #[serde(rename = "max-entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: 3_600,
            max_entries: 1_000,
        }
    }
}

/// Crawl scope configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// 1 = packages only, 2 = packages and classes, 3 = classes with members
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Class links considered per package; the rest are dropped
    #[serde(rename = "max-classes-per-package")]
    pub max_classes_per_package: usize,

    /// Methods kept per class; the rest are dropped before storing
    #[serde(rename = "max-methods-per-class")]
    pub max_methods_per_class: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_classes_per_package: 500,
            max_methods_per_class: 200,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_path: "./javadoc.db".to_string(),
        }
    }
}
