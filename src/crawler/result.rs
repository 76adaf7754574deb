//! Outcome of a single crawl

use std::fmt;
use std::time::Duration;

/// Errors kept per crawl; later errors are counted in logs only
pub const MAX_RECORDED_ERRORS: usize = 100;

/// Counters and errors collected while crawling one library version
#[derive(Debug, Clone, Default)]
pub struct CrawlResult {
    pub library_name: String,
    pub version: String,
    pub total_packages: usize,
    pub packages_processed: usize,
    pub packages_skipped: usize,
    pub classes_processed: usize,
    pub classes_skipped: usize,
    pub methods_stored: usize,
    pub fields_stored: usize,
    pub constructors_stored: usize,
    pub duration: Duration,
    pub errors: Vec<String>,
}

impl CrawlResult {
    pub fn new(library_name: &str, version: &str) -> Self {
        Self {
            library_name: library_name.to_string(),
            version: version.to_string(),
            ..Default::default()
        }
    }

    /// Records an error unless the list is already full
    pub fn add_error(&mut self, error: impl Into<String>) {
        if self.errors.len() < MAX_RECORDED_ERRORS {
            self.errors.push(error.into());
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// A crawl succeeded if at least one package was processed or already stored
    pub fn is_successful(&self) -> bool {
        self.packages_processed > 0 || self.packages_skipped > 0
    }
}

impl fmt::Display for CrawlResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CrawlResult[{}/{}: {} packages ({} skipped), {} classes ({} skipped), {} methods, {} errors, {}s]",
            self.library_name,
            self.version,
            self.packages_processed,
            self.packages_skipped,
            self.classes_processed,
            self.classes_skipped,
            self.methods_stored,
            self.errors.len(),
            self.duration.as_secs()
        )
    }
}
