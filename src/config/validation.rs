use crate::config::types::{CacheConfig, Config, CrawlerConfig, FetcherConfig, OutputConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_cache_config(&config.cache)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.connect_timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "connect_timeout_ms must be > 0".to_string(),
        ));
    }

    if config.read_timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "read_timeout_ms must be > 0".to_string(),
        ));
    }

    // Keeps retry_delay * 2^attempt well inside u64
    if config.max_retries > 16 {
        return Err(ConfigError::Validation(format!(
            "max_retries must be <= 16, got {}",
            config.max_retries
        )));
    }

    Ok(())
}

/// Validates cache configuration; sizes only matter when the cache is on
fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if !config.enabled {
        return Ok(());
    }

    if config.ttl_seconds == 0 {
        return Err(ConfigError::Validation(
            "cache ttl_seconds must be > 0 when the cache is enabled".to_string(),
        ));
    }

    if config.max_entries == 0 {
        return Err(ConfigError::Validation(
            "cache max_entries must be > 0 when the cache is enabled".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if !(1..=3).contains(&config.max_depth) {
        return Err(ConfigError::Validation(format!(
            "max_depth must be between 1 and 3, got {}",
            config.max_depth
        )));
    }

    if config.max_classes_per_package < 1 {
        return Err(ConfigError::Validation(format!(
            "max_classes_per_package must be >= 1, got {}",
            config.max_classes_per_package
        )));
    }

    if config.max_methods_per_class < 1 {
        return Err(ConfigError::Validation(format!(
            "max_methods_per_class must be >= 1, got {}",
            config.max_methods_per_class
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
