//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use crate::model::{Constructor, Field, Method};
use crate::parser::{ParsedClass, ParsedPackage};
use crate::storage::{ClassRecord, PackageRecord, VersionStats};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storage backend implementations
///
/// Rows are keyed by `(library, version, package)` and `(library, version, fqcn)`.
/// Once created they are never updated; re-saving an existing key returns the
/// stored row unchanged.
pub trait Storage {
    // ===== Writes =====

    /// Gets or creates a package row
    ///
    /// # Arguments
    ///
    /// * `library` - Library name
    /// * `version` - Library version
    /// * `package` - Parsed package; its `package_name` is the key
    ///
    /// # Returns
    ///
    /// The stored row (either newly created or existing)
    fn save_package(
        &mut self,
        library: &str,
        version: &str,
        package: &ParsedPackage,
    ) -> StorageResult<PackageRecord>;

    /// Creates a class row together with its members
    ///
    /// The stored FQCN is always `package.simple_name`, whatever the parsed
    /// class carries.
    ///
    /// # Returns
    ///
    /// * `Some(ClassRecord)` - The class was created
    /// * `None` - The name was invalid or the class already exists
    fn save_class(
        &mut self,
        package: &PackageRecord,
        class: &ParsedClass,
    ) -> StorageResult<Option<ClassRecord>>;

    /// Deletes every package of a library version, cascading to classes and members
    ///
    /// Returns the number of packages removed.
    fn clear_library_version(&mut self, library: &str, version: &str) -> StorageResult<usize>;

    // ===== Existence checks =====

    fn package_exists(&self, library: &str, version: &str, package_name: &str)
        -> StorageResult<bool>;

    fn class_exists(&self, library: &str, version: &str, fqcn: &str) -> StorageResult<bool>;

    /// Checks whether any package is stored for the library version
    fn exists_for_version(&self, library: &str, version: &str) -> StorageResult<bool>;

    // ===== Reads =====

    fn get_package(
        &self,
        library: &str,
        version: &str,
        package_name: &str,
    ) -> StorageResult<Option<PackageRecord>>;

    fn get_class(&self, library: &str, version: &str, fqcn: &str)
        -> StorageResult<Option<ClassRecord>>;

    /// Gets all classes of a library version, ordered by FQCN
    fn get_classes(&self, library: &str, version: &str) -> StorageResult<Vec<ClassRecord>>;

    fn get_methods(&self, class_id: i64) -> StorageResult<Vec<Method>>;

    fn get_fields(&self, class_id: i64) -> StorageResult<Vec<Field>>;

    fn get_constructors(&self, class_id: i64) -> StorageResult<Vec<Constructor>>;

    // ===== Statistics =====

    /// Counts stored entities of a library version
    fn get_version_stats(&self, library: &str, version: &str) -> StorageResult<VersionStats>;

    /// Gets the distinct library names, sorted
    fn get_library_names(&self) -> StorageResult<Vec<String>>;

    /// Gets the distinct versions stored for a library
    fn get_versions(&self, library: &str) -> StorageResult<Vec<String>>;
}
