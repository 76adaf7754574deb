//! Resolution of requested versions against stored ones

use crate::storage::{Storage, StorageResult};
use crate::version::ordering::{compare_versions, is_stable_version};

/// Keyword that selects the newest stored version
const LATEST: &str = "latest";

/// Resolves version requests for a library against what storage holds
pub struct VersionResolver<'a> {
    storage: &'a dyn Storage,
}

impl<'a> VersionResolver<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Resolves a requested version
    ///
    /// A missing, blank or `latest` (any case) request resolves to
    /// [`get_latest_version`](Self::get_latest_version). Any other request
    /// resolves to itself when it is stored, and to `None` otherwise.
    pub fn resolve_version(
        &self,
        library: &str,
        requested: Option<&str>,
    ) -> StorageResult<Option<String>> {
        let requested = requested.map(str::trim).unwrap_or_default();
        if requested.is_empty() || requested.eq_ignore_ascii_case(LATEST) {
            return self.get_latest_version(library);
        }

        if self.storage.exists_for_version(library, requested)? {
            Ok(Some(requested.to_string()))
        } else {
            Ok(None)
        }
    }

    /// Picks the newest stable version, or the newest version when none is stable
    pub fn get_latest_version(&self, library: &str) -> StorageResult<Option<String>> {
        let versions = self.get_available_versions(library)?;

        let latest = versions
            .iter()
            .find(|version| is_stable_version(version))
            .or_else(|| versions.first())
            .cloned();

        Ok(latest)
    }

    /// Lists stored versions, newest first
    pub fn get_available_versions(&self, library: &str) -> StorageResult<Vec<String>> {
        let mut versions = self.storage.get_versions(library)?;
        versions.sort_by(|a, b| compare_versions(b, a));
        Ok(versions)
    }

    pub fn is_stable_version(&self, version: &str) -> bool {
        is_stable_version(version)
    }

    pub fn compare_versions(&self, a: &str, b: &str) -> std::cmp::Ordering {
        compare_versions(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedPackage;
    use crate::storage::SqliteStorage;

    fn storage_with(library: &str, versions: &[&str]) -> SqliteStorage {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let package = ParsedPackage {
            package_name: "com.example".to_string(),
            source_url: "https://docs.example.com/api/com/example/package-summary.html"
                .to_string(),
            ..Default::default()
        };
        for version in versions {
            storage.save_package(library, version, &package).unwrap();
        }
        storage
    }

    #[test]
    fn test_latest_prefers_highest_stable() {
        let storage = storage_with("lib", &["1.0.0", "1.1.0-RC1", "1.1.0"]);
        let resolver = VersionResolver::new(&storage);
        assert_eq!(
            resolver.get_latest_version("lib").unwrap(),
            Some("1.1.0".to_string())
        );
    }

    #[test]
    fn test_latest_skips_newer_prerelease() {
        let storage = storage_with("lib", &["1.0.0", "2.0.0-SNAPSHOT", "2.0.0-M1"]);
        let resolver = VersionResolver::new(&storage);
        assert_eq!(
            resolver.get_latest_version("lib").unwrap(),
            Some("1.0.0".to_string())
        );
    }

    #[test]
    fn test_latest_falls_back_to_highest_prerelease() {
        let storage = storage_with("lib", &["2.0.0-SNAPSHOT", "2.0.0-RC1"]);
        let resolver = VersionResolver::new(&storage);
        assert_eq!(
            resolver.get_latest_version("lib").unwrap(),
            Some("2.0.0-RC1".to_string())
        );
    }

    #[test]
    fn test_latest_for_unknown_library() {
        let storage = storage_with("lib", &["1.0.0"]);
        let resolver = VersionResolver::new(&storage);
        assert_eq!(resolver.get_latest_version("other").unwrap(), None);
    }

    #[test]
    fn test_resolve_latest_keyword() {
        let storage = storage_with("lib", &["1.0.0", "1.2.0"]);
        let resolver = VersionResolver::new(&storage);

        for request in [None, Some(""), Some("  "), Some("latest"), Some("LATEST")] {
            assert_eq!(
                resolver.resolve_version("lib", request).unwrap(),
                Some("1.2.0".to_string()),
                "request {:?}",
                request
            );
        }
    }

    #[test]
    fn test_resolve_explicit_version() {
        let storage = storage_with("lib", &["1.0.0", "1.2.0"]);
        let resolver = VersionResolver::new(&storage);

        assert_eq!(
            resolver.resolve_version("lib", Some("1.0.0")).unwrap(),
            Some("1.0.0".to_string())
        );
        assert_eq!(resolver.resolve_version("lib", Some("9.9.9")).unwrap(), None);
    }

    #[test]
    fn test_available_versions_newest_first() {
        let storage = storage_with("lib", &["1.0.0", "1.10.0", "1.9.0", "nightly"]);
        let resolver = VersionResolver::new(&storage);
        assert_eq!(
            resolver.get_available_versions("lib").unwrap(),
            vec!["1.10.0", "1.9.0", "1.0.0", "nightly"]
        );
    }
}
