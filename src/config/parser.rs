use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use javadoc_harvest::config::load_config;
///
/// let config = load_config(Path::new("harvest.toml")).unwrap();
/// println!("Max depth: {}", config.crawler.max_depth);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    tracing::debug!(
        "Configuration parsed: depth {}, cache {}",
        config.crawler.max_depth,
        if config.cache.enabled { "on" } else { "off" }
    );
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// This is logged at startup so crawl logs can be tied to the exact configuration used.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(hash_content(&content))
}

fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Loads a configuration and returns both the config and its hash
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok((Config, String))` - Successfully loaded configuration and its hash
/// * `Err(ConfigError)` - Failed to load or parse the configuration
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    // Hash the exact bytes that were parsed
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok((config, hash_content(&content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[fetcher]
user-agent = "TestHarvester/1.0"
rate-limit-ms = 0
connect-timeout-ms = 5000
read-timeout-ms = 10000
max-retries = 1
retry-delay-ms = 10

[cache]
enabled = false

[crawler]
max-depth = 2
max-classes-per-package = 50

[output]
database-path = "./test.db"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetcher.user_agent, "TestHarvester/1.0");
        assert_eq!(config.fetcher.rate_limit_ms, 0);
        assert_eq!(config.fetcher.max_retries, 1);
        assert!(!config.cache.enabled);
        assert_eq!(config.crawler.max_depth, 2);
        assert_eq!(config.crawler.max_classes_per_package, 50);
        // Unset keys keep their defaults
        assert_eq!(config.crawler.max_methods_per_class, 200);
        assert_eq!(config.output.database_path, "./test.db");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetcher.rate_limit_ms, 500);
        assert_eq!(config.fetcher.connect_timeout_ms, 10_000);
        assert_eq!(config.fetcher.read_timeout_ms, 30_000);
        assert_eq!(config.fetcher.max_retries, 3);
        assert_eq!(config.fetcher.retry_delay_ms, 1_000);
        assert!(config.cache.enabled);
        assert_eq!(config.cache.ttl_seconds, 3_600);
        assert_eq!(config.cache.max_entries, 1_000);
        assert_eq!(config.crawler.max_depth, 3);
        assert_eq!(config.crawler.max_classes_per_package, 500);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/harvest.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let file = create_temp_config("[fetcher\nuser-agent = ");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_out_of_range_depth_is_rejected() {
        let file = create_temp_config("[crawler]\nmax-depth = 7\n");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_hash_matches_parsed_bytes() {
        let file = create_temp_config("[cache]\nenabled = false\n");

        let (config, hash) = load_config_with_hash(file.path()).unwrap();
        assert!(!config.cache.enabled);
        assert_eq!(hash, compute_config_hash(file.path()).unwrap());
        assert_eq!(hash, hash_content("[cache]\nenabled = false\n"));
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_hash_changes_with_content() {
        assert_ne!(
            hash_content("[cache]\nenabled = true\n"),
            hash_content("[cache]\nenabled = false\n")
        );
    }
}
