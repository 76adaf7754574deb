//! Crawl coordinator - end-to-end crawl of one library version
//!
//! A crawl walks the package inventory, then every package summary page, then
//! the class pages linked from each summary. Everything is sequential within a
//! crawl: each fetch is awaited before its page is parsed and stored, and
//! before the next fetch starts.
//!
//! Items that are already stored are skipped without touching the network, so
//! an interrupted crawl resumes where it stopped.

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::result::CrawlResult;
use crate::parser::{class_link_candidates, parse_class_page, parse_package_summary};
use crate::storage::{PackageRecord, Storage};
use crate::url::{class_page_url, normalize_base_url, package_summary_url};
use crate::{HarvestError, Result};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// Error recorded when the inventory yields no packages
pub const NO_PACKAGES_ERROR: &str = "No packages found in package-list/element-list";

/// Packages between two progress log lines
const PROGRESS_INTERVAL: usize = 10;

/// Extracts package names from an `element-list` or `package-list` body
///
/// Lines are trimmed; blank lines and `module:` lines are skipped.
pub fn parse_package_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("module:"))
        .map(str::to_string)
        .collect()
}

/// Drives crawls of Javadoc sites into storage
pub struct Crawler<S: Storage> {
    fetcher: Arc<Fetcher>,
    storage: Arc<Mutex<S>>,
    config: CrawlerConfig,
}

impl<S: Storage> Crawler<S> {
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Fetcher shared with other crawls
    /// * `storage` - Storage shared with other crawls; locked per call
    /// * `config` - Depth and per-item caps
    pub fn new(fetcher: Arc<Fetcher>, storage: Arc<Mutex<S>>, config: CrawlerConfig) -> Self {
        Self {
            fetcher,
            storage,
            config,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>> {
        self.storage
            .lock()
            .map_err(|_| HarvestError::Crawl("storage lock poisoned".to_string()))
    }

    /// Crawls one library version
    ///
    /// Failures of individual packages or classes are recorded in the result
    /// and do not stop the crawl. Only an invalid base URL is returned as an
    /// error; an empty or unreachable inventory yields an unsuccessful result.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Documentation root, e.g. `https://docs.example.com/lib/1.0/api/`
    /// * `library` - Library name the records are stored under
    /// * `version` - Library version the records are stored under
    pub async fn crawl(&self, base_url: &str, library: &str, version: &str) -> Result<CrawlResult> {
        let started = Instant::now();
        let mut result = CrawlResult::new(library, version);
        let base_url = normalize_base_url(base_url)?;

        tracing::info!("Starting crawl of {} {} from {}", library, version, base_url);

        let packages = match self.fetcher.fetch_package_list(&base_url).await {
            Ok(body) => parse_package_list(&body),
            Err(e) => {
                tracing::warn!("Failed to fetch package inventory: {}", e);
                Vec::new()
            }
        };

        if packages.is_empty() {
            tracing::error!("{} at {}", NO_PACKAGES_ERROR, base_url);
            result.add_error(NO_PACKAGES_ERROR);
            result.duration = started.elapsed();
            return Ok(result);
        }

        result.total_packages = packages.len();
        tracing::info!("Found {} packages", packages.len());

        for (index, package_name) in packages.iter().enumerate() {
            if let Err(e) = self
                .crawl_package(&base_url, library, version, package_name, &mut result)
                .await
            {
                tracing::debug!("Package {} failed: {}", package_name, e);
                result.add_error(format!("Package {}: {}", package_name, e));
            }

            if (index + 1) % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    "Progress: {}/{} packages, {} classes, {:.1}s elapsed",
                    index + 1,
                    packages.len(),
                    result.classes_processed,
                    started.elapsed().as_secs_f64()
                );
            }
        }

        result.duration = started.elapsed();
        tracing::info!("Crawl completed: {}", result);
        tracing::info!("Page cache: {}", self.fetcher.cache_stats());

        Ok(result)
    }

    /// Stores one package and, depth permitting, its classes
    async fn crawl_package(
        &self,
        base_url: &str,
        library: &str,
        version: &str,
        package_name: &str,
        result: &mut CrawlResult,
    ) -> Result<()> {
        let exists = self.lock()?.package_exists(library, version, package_name)?;
        if exists {
            tracing::debug!("Package {} already stored, skipping", package_name);
            result.packages_skipped += 1;
            return Ok(());
        }

        let url = package_summary_url(base_url, package_name);
        let html = self.fetcher.fetch_page(&url).await?;

        let mut parsed = parse_package_summary(&html, &url);
        parsed.package_name = package_name.to_string();
        parsed.source_url = url;

        let package = self.lock()?.save_package(library, version, &parsed)?;
        result.packages_processed += 1;

        if self.config.max_depth < 2 {
            return Ok(());
        }

        let candidates = class_link_candidates(&html);
        if candidates.len() > self.config.max_classes_per_package {
            tracing::debug!(
                "Package {} lists {} classes, keeping {}",
                package_name,
                candidates.len(),
                self.config.max_classes_per_package
            );
        }

        for class_name in candidates.iter().take(self.config.max_classes_per_package) {
            if let Err(e) = self.crawl_class(base_url, &package, class_name, result).await {
                tracing::debug!("Class {}.{} failed: {}", package_name, class_name, e);
                result.add_error(format!("Class {}.{}: {}", package_name, class_name, e));
            }
        }

        Ok(())
    }

    /// Stores one class with its members
    async fn crawl_class(
        &self,
        base_url: &str,
        package: &PackageRecord,
        class_name: &str,
        result: &mut CrawlResult,
    ) -> Result<()> {
        let fqcn = format!("{}.{}", package.package_name, class_name);

        let exists = self
            .lock()?
            .class_exists(&package.library_name, &package.version, &fqcn)?;
        if exists {
            tracing::debug!("Class {} already stored, skipping", fqcn);
            result.classes_skipped += 1;
            return Ok(());
        }

        let url = class_page_url(base_url, &package.package_name, class_name);
        let html = self.fetcher.fetch_page(&url).await?;

        let mut parsed = parse_class_page(&html, &url);
        parsed.simple_name = class_name.to_string();
        parsed.fqcn = fqcn;
        parsed.source_url = url;

        if self.config.max_depth < 3 {
            parsed.methods.clear();
            parsed.fields.clear();
            parsed.constructors.clear();
        } else {
            parsed.methods.truncate(self.config.max_methods_per_class);
        }

        let saved = self.lock()?.save_class(package, &parsed)?;
        match saved {
            Some(class) => {
                tracing::debug!(
                    "Stored {} ({} methods, {} fields, {} constructors)",
                    class.fqcn,
                    parsed.methods.len(),
                    parsed.fields.len(),
                    parsed.constructors.len()
                );
                result.classes_processed += 1;
                result.methods_stored += parsed.methods.len();
                result.fields_stored += parsed.fields.len();
                result.constructors_stored += parsed.constructors.len();
            }
            None => tracing::debug!("Class {} was not stored", parsed.fqcn),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_element_list() {
        let body = "module:java.base\njava.lang\n\n  java.util  \nmodule:java.sql\njava.sql\n";
        assert_eq!(
            parse_package_list(body),
            vec!["java.lang", "java.util", "java.sql"]
        );
    }

    #[test]
    fn test_parse_empty_package_list() {
        assert!(parse_package_list("").is_empty());
        assert!(parse_package_list("\n  \n").is_empty());
    }
}
