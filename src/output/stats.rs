//! Statistics reporting from the harvest database
//!
//! This module provides functionality for extracting and displaying
//! per-version statistics, library listings and crawl outcomes.

use crate::crawler::CrawlResult;
use crate::storage::{Storage, VersionStats};
use crate::version::VersionResolver;
use crate::HarvestError;

/// One library and the versions stored for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySummary {
    pub library_name: String,

    /// Stored versions, newest first
    pub versions: Vec<String>,

    /// Version `latest` currently resolves to
    pub latest: Option<String>,
}

/// Loads entity counts for one library version
///
/// # Arguments
///
/// * `storage` - The storage backend to query
/// * `library` - Library name
/// * `version` - Library version
pub fn load_version_statistics(
    storage: &dyn Storage,
    library: &str,
    version: &str,
) -> Result<VersionStats, HarvestError> {
    Ok(storage.get_version_stats(library, version)?)
}

/// Loads every stored library with its versions
pub fn load_library_summaries(storage: &dyn Storage) -> Result<Vec<LibrarySummary>, HarvestError> {
    let resolver = VersionResolver::new(storage);

    storage
        .get_library_names()?
        .into_iter()
        .map(|library_name| -> Result<LibrarySummary, HarvestError> {
            let versions = resolver.get_available_versions(&library_name)?;
            let latest = resolver.get_latest_version(&library_name)?;
            Ok(LibrarySummary {
                library_name,
                versions,
                latest,
            })
        })
        .collect()
}

/// Joins report lines, ending every line with a newline
fn render(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Renders version statistics as a plain-text block
pub fn format_version_statistics(stats: &VersionStats) -> String {
    let mut lines = vec![format!("=== {} {} ===", stats.library_name, stats.version)];
    if stats.is_empty() {
        lines.push("  Nothing stored for this version".to_string());
        return render(lines);
    }

    lines.extend([
        format!("  Packages:     {}", stats.packages),
        format!("  Classes:      {}", stats.classes),
        format!("  Methods:      {}", stats.methods),
        format!("  Fields:       {}", stats.fields),
        format!("  Constructors: {}", stats.constructors),
    ]);
    render(lines)
}

/// Renders the library listing
pub fn format_library_summaries(libraries: &[LibrarySummary]) -> String {
    if libraries.is_empty() {
        return render(vec!["No libraries stored".to_string()]);
    }

    let mut lines = vec![format!("Libraries ({}):", libraries.len())];
    lines.extend(libraries.iter().map(|library| {
        format!(
            "  {} [latest: {}] {}",
            library.library_name,
            library.latest.as_deref().unwrap_or("-"),
            library.versions.join(", ")
        )
    }));
    render(lines)
}

/// Renders the outcome of a crawl, including recorded errors
pub fn format_crawl_result(result: &CrawlResult) -> String {
    let status = if result.is_successful() { "success" } else { "failed" };
    let mut lines = vec![
        format!("=== Crawl of {} {} ===", result.library_name, result.version),
        format!("  Packages found:     {}", result.total_packages),
        format!(
            "  Packages stored:    {} ({} already present)",
            result.packages_processed, result.packages_skipped
        ),
        format!(
            "  Classes stored:     {} ({} already present)",
            result.classes_processed, result.classes_skipped
        ),
        format!("  Methods stored:     {}", result.methods_stored),
        format!("  Fields stored:      {}", result.fields_stored),
        format!("  Constructors stored: {}", result.constructors_stored),
        format!("  Duration:           {:.1}s", result.duration.as_secs_f64()),
        format!("  Status:             {}", status),
    ];

    if result.has_errors() {
        lines.push(String::new());
        lines.push(format!("Errors ({}):", result.errors.len()));
        lines.extend(result.errors.iter().map(|error| format!("  - {}", error)));
    }
    render(lines)
}

/// Prints version statistics to stdout
pub fn print_version_statistics(stats: &VersionStats) {
    print!("{}", format_version_statistics(stats));
}

/// Prints the library listing to stdout
pub fn print_library_summaries(libraries: &[LibrarySummary]) {
    print!("{}", format_library_summaries(libraries));
}

/// Prints a crawl outcome to stdout
pub fn print_crawl_result(result: &CrawlResult) {
    print!("{}", format_crawl_result(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedPackage;
    use crate::storage::SqliteStorage;
    use std::time::Duration;

    #[test]
    fn test_format_version_statistics() {
        let stats = VersionStats {
            library_name: "lib".to_string(),
            version: "1.0".to_string(),
            packages: 2,
            classes: 9,
            methods: 31,
            fields: 4,
            constructors: 5,
        };
        let text = format_version_statistics(&stats);
        assert!(text.starts_with("=== lib 1.0 ==="));
        assert!(text.contains("Classes:      9"));
        assert!(text.contains("Constructors: 5"));
    }

    #[test]
    fn test_version_statistics_layout() {
        let stats = VersionStats {
            library_name: "lib".to_string(),
            version: "2.1".to_string(),
            packages: 1,
            classes: 2,
            methods: 3,
            fields: 4,
            constructors: 5,
        };
        assert_eq!(
            format_version_statistics(&stats),
            "=== lib 2.1 ===\n  Packages:     1\n  Classes:      2\n  Methods:      3\n  Fields:       4\n  Constructors: 5\n"
        );
    }

    #[test]
    fn test_format_empty_version_statistics() {
        let stats = VersionStats {
            library_name: "lib".to_string(),
            version: "9.9".to_string(),
            ..Default::default()
        };
        assert!(format_version_statistics(&stats).contains("Nothing stored"));
    }

    #[test]
    fn test_load_library_summaries() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let package = ParsedPackage {
            package_name: "com.example".to_string(),
            source_url: "https://docs.example.com/api/com/example/package-summary.html"
                .to_string(),
            ..Default::default()
        };
        for version in ["1.0.0", "1.1.0", "2.0.0-RC1"] {
            storage.save_package("lib", version, &package).unwrap();
        }

        let libraries = load_library_summaries(&storage).unwrap();
        assert_eq!(libraries.len(), 1);
        assert_eq!(libraries[0].versions, vec!["2.0.0-RC1", "1.1.0", "1.0.0"]);
        assert_eq!(libraries[0].latest.as_deref(), Some("1.1.0"));

        let text = format_library_summaries(&libraries);
        assert!(text.contains("lib [latest: 1.1.0] 2.0.0-RC1, 1.1.0, 1.0.0"));
    }

    #[test]
    fn test_format_no_libraries() {
        assert_eq!(format_library_summaries(&[]), "No libraries stored\n");
    }

    #[test]
    fn test_format_crawl_result_lists_errors() {
        let mut result = CrawlResult::new("lib", "1.0");
        result.total_packages = 3;
        result.packages_processed = 2;
        result.duration = Duration::from_millis(1500);
        result.add_error("Package com.broken: HTTP 500");

        let text = format_crawl_result(&result);
        assert!(text.contains("Packages stored:    2 (0 already present)"));
        assert!(text.contains("Duration:           1.5s"));
        assert!(text.contains("success"));
        assert!(text.contains("  Status:             success\n\nErrors (1):\n"));
        assert!(text.ends_with("  - Package com.broken: HTTP 500\n"));
    }
}
