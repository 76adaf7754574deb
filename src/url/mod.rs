//! URL handling module for Javadoc-Harvest
//!
//! This module normalizes documentation root URLs and builds the page URLs a
//! Javadoc site exposes: the package inventory files, package summaries and
//! class pages.

mod normalize;

// Re-export main functions
pub use normalize::{normalize_base_url, package_from_url, package_path};

/// Modern package inventory file name
pub const ELEMENT_LIST: &str = "element-list";

/// Legacy package inventory file name
pub const PACKAGE_LIST: &str = "package-list";

/// Builds the URL of a package's summary page
///
/// # Arguments
///
/// * `base_url` - A normalized base URL (ending in `/`)
/// * `package_name` - Dotted package name
///
/// # Examples
///
/// ```
/// use javadoc_harvest::url::package_summary_url;
///
/// let url = package_summary_url("https://docs.example.com/api/", "com.example.pkg");
/// assert_eq!(url, "https://docs.example.com/api/com/example/pkg/package-summary.html");
/// ```
pub fn package_summary_url(base_url: &str, package_name: &str) -> String {
    format!(
        "{}{}/package-summary.html",
        base_url,
        package_path(package_name)
    )
}

/// Builds the URL of a class page
///
/// # Arguments
///
/// * `base_url` - A normalized base URL (ending in `/`)
/// * `package_name` - Dotted package name
/// * `class_name` - Simple class name (nested classes keep their dots, e.g. `Map.Entry`)
pub fn class_page_url(base_url: &str, package_name: &str, class_name: &str) -> String {
    format!(
        "{}{}/{}.html",
        base_url,
        package_path(package_name),
        class_name
    )
}

/// Builds the URL of a package inventory file (`element-list` or `package-list`)
pub fn inventory_url(base_url: &str, file_name: &str) -> String {
    format!("{}{}", base_url, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://docs.example.com/lib/1.0/api/";

    #[test]
    fn test_package_summary_url() {
        assert_eq!(
            package_summary_url(BASE, "com.example.pkg"),
            "https://docs.example.com/lib/1.0/api/com/example/pkg/package-summary.html"
        );
    }

    #[test]
    fn test_class_page_url() {
        assert_eq!(
            class_page_url(BASE, "com.example.pkg", "Widget"),
            "https://docs.example.com/lib/1.0/api/com/example/pkg/Widget.html"
        );
    }

    #[test]
    fn test_inventory_urls() {
        assert_eq!(
            inventory_url(BASE, ELEMENT_LIST),
            "https://docs.example.com/lib/1.0/api/element-list"
        );
        assert_eq!(
            inventory_url(BASE, PACKAGE_LIST),
            "https://docs.example.com/lib/1.0/api/package-list"
        );
    }
}
