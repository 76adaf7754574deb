//! Storage module for persisting harvested documentation
//!
//! This module handles all database operations, including:
//! - SQLite database initialization and schema management
//! - Get-or-create persistence of packages and classes
//! - Member persistence with cascade delete
//! - Per-version statistics and listing queries

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{Storage, StorageError, StorageResult};

use crate::model::ClassKind;
use crate::HarvestError;

use std::fmt;
use std::path::Path;

/// Initializes or opens a storage database
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStorage)` - Successfully initialized storage
/// * `Err(HarvestError)` - Failed to initialize storage
pub fn open_storage(path: &Path) -> Result<SqliteStorage, HarvestError> {
    SqliteStorage::new(path)
}

/// Represents a package in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub id: i64,
    pub library_name: String,
    pub version: String,
    pub package_name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub source_url: String,
    pub created_at: String,
}

/// Represents a class in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub id: i64,
    pub package_id: i64,
    pub library_name: String,
    pub version: String,
    pub fqcn: String,
    pub simple_name: String,
    pub kind: ClassKind,
    pub modifiers: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub super_class: Option<String>,
    pub interfaces: Vec<String>,
    pub deprecated: bool,
    pub deprecated_message: Option<String>,
    pub annotations: Vec<String>,
    pub source_url: String,
    pub created_at: String,
}

/// Entity counts for one library version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionStats {
    pub library_name: String,
    pub version: String,
    pub packages: u64,
    pub classes: u64,
    pub methods: u64,
    pub fields: u64,
    pub constructors: u64,
}

impl VersionStats {
    /// True when nothing is stored for the version
    pub fn is_empty(&self) -> bool {
        self.packages == 0
    }
}

impl fmt::Display for VersionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}: {} packages, {} classes, {} methods, {} fields, {} constructors",
            self.library_name,
            self.version,
            self.packages,
            self.classes,
            self.methods,
            self.fields,
            self.constructors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_stats_display() {
        let stats = VersionStats {
            library_name: "lib".to_string(),
            version: "1.0".to_string(),
            packages: 2,
            classes: 5,
            methods: 40,
            fields: 3,
            constructors: 6,
        };
        assert_eq!(
            stats.to_string(),
            "lib/1.0: 2 packages, 5 classes, 40 methods, 3 fields, 6 constructors"
        );
        assert!(!stats.is_empty());
        assert!(VersionStats::default().is_empty());
    }
}
