//! Javadoc-Harvest: structured API reference data from Javadoc sites
//!
//! This crate crawls Javadoc-style documentation sites (both the legacy and the
//! modern page layouts), normalizes packages, classes and members into a single
//! data model, and persists them per `(library, version)` in SQLite.

pub mod config;
pub mod crawler;
pub mod model;
pub mod output;
pub mod parser;
pub mod storage;
pub mod url;
pub mod version;

use thiserror::Error;

/// Main error type for Javadoc-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] crawler::FetchError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::StorageError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Crawl error: {0}")]
    Crawl(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),
}

/// Result type alias for Javadoc-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlResult, Crawler, Fetcher, PageCache};
pub use model::ClassKind;
pub use parser::{parse_class_page, parse_package_summary, ParsedClass, ParsedPackage};
pub use version::VersionResolver;
