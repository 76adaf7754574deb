//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Storage trait.

use crate::model::{ClassKind, Constructor, Field, Method, Parameter};
use crate::parser::{ParsedClass, ParsedPackage};
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Storage, StorageError, StorageResult};
use crate::storage::{ClassRecord, PackageRecord, VersionStats};
use crate::HarvestError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

const PACKAGE_COLUMNS: &str =
    "id, library_name, version, package_name, summary, description, source_url, created_at";

const CLASS_COLUMNS: &str = "id, package_id, library_name, version, fqcn, simple_name, kind, \
     modifiers, summary, description, super_class, interfaces, deprecated, deprecated_message, \
     annotations, source_url, created_at";

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(HarvestError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, HarvestError> {
        let conn = Connection::open(path)?;

        // Several crawls may share one file
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, HarvestError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    fn count(&self, sql: &str, library: &str, version: &str) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row(sql, params![library, version], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn package_from_row(row: &Row<'_>) -> rusqlite::Result<PackageRecord> {
    Ok(PackageRecord {
        id: row.get(0)?,
        library_name: row.get(1)?,
        version: row.get(2)?,
        package_name: row.get(3)?,
        summary: row.get(4)?,
        description: row.get(5)?,
        source_url: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn class_from_row(row: &Row<'_>) -> rusqlite::Result<ClassRecord> {
    Ok(ClassRecord {
        id: row.get(0)?,
        package_id: row.get(1)?,
        library_name: row.get(2)?,
        version: row.get(3)?,
        fqcn: row.get(4)?,
        simple_name: row.get(5)?,
        kind: ClassKind::from_db_string(&row.get::<_, String>(6)?).unwrap_or_default(),
        modifiers: row.get(7)?,
        summary: row.get(8)?,
        description: row.get(9)?,
        super_class: row.get(10)?,
        interfaces: decode_list(&row.get::<_, String>(11)?),
        deprecated: row.get(12)?,
        deprecated_message: row.get(13)?,
        annotations: decode_list(&row.get::<_, String>(14)?),
        source_url: row.get(15)?,
        created_at: row.get(16)?,
    })
}

/// Decodes a JSON list column, treating unreadable content as empty
fn decode_list<T: DeserializeOwned>(text: &str) -> Vec<T> {
    serde_json::from_str(text).unwrap_or_default()
}

/// Checks a simple class name before it is allowed into the database
fn is_valid_simple_name(simple_name: &str, package_name: &str) -> bool {
    !simple_name.is_empty() && !simple_name.contains('-') && simple_name != package_name
}

impl Storage for SqliteStorage {
    // ===== Writes =====

    fn save_package(
        &mut self,
        library: &str,
        version: &str,
        package: &ParsedPackage,
    ) -> StorageResult<PackageRecord> {
        if let Some(existing) = self.get_package(library, version, &package.package_name)? {
            return Ok(existing);
        }

        let now = Utc::now().to_rfc3339();
        // A concurrent crawler may win the insert; its row is returned below
        self.conn.execute(
            "INSERT INTO packages (library_name, version, package_name, summary, description, source_url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(library_name, version, package_name) DO NOTHING",
            params![
                library,
                version,
                package.package_name,
                package.summary,
                package.description,
                package.source_url,
                now
            ],
        )?;

        self.get_package(library, version, &package.package_name)?
            .ok_or_else(|| StorageError::PackageNotFound(package.package_name.clone()))
    }

    fn save_class(
        &mut self,
        package: &PackageRecord,
        class: &ParsedClass,
    ) -> StorageResult<Option<ClassRecord>> {
        let simple_name = class.simple_name.trim();
        if !is_valid_simple_name(simple_name, &package.package_name) {
            tracing::debug!(
                "Rejecting class name {:?} in package {}",
                simple_name,
                package.package_name
            );
            return Ok(None);
        }

        let fqcn = format!("{}.{}", package.package_name, simple_name);
        if self.class_exists(&package.library_name, &package.version, &fqcn)? {
            return Ok(None);
        }

        let now = Utc::now().to_rfc3339();
        let interfaces = serde_json::to_string(&class.interfaces)?;
        let annotations = serde_json::to_string(&class.annotations)?;

        let tx = self.conn.transaction()?;

        let inserted = tx.execute(
            "INSERT INTO classes (package_id, library_name, version, fqcn, simple_name, kind, modifiers,
             summary, description, super_class, interfaces, deprecated, deprecated_message,
             annotations, source_url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
             ON CONFLICT(library_name, version, fqcn) DO NOTHING",
            params![
                package.id,
                package.library_name,
                package.version,
                fqcn,
                simple_name,
                class.kind.to_db_string(),
                class.modifiers,
                class.summary,
                class.description,
                class.super_class,
                interfaces,
                class.deprecated,
                class.deprecated_message,
                annotations,
                class.source_url,
                now
            ],
        )?;

        if inserted == 0 {
            tracing::debug!("Class {} was stored concurrently, skipping", fqcn);
            return Ok(None);
        }

        let class_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO methods (class_id, name, signature, return_type, summary, description,
                 parameters, throws_list, annotations, deprecated, deprecated_message)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for method in &class.methods {
                stmt.execute(params![
                    class_id,
                    method.name,
                    method.signature,
                    method.return_type,
                    method.summary,
                    method.description,
                    serde_json::to_string(&method.parameters)?,
                    serde_json::to_string(&method.throws_list)?,
                    serde_json::to_string(&method.annotations)?,
                    method.deprecated,
                    method.deprecated_message
                ])?;
            }

            let mut stmt = tx.prepare(
                "INSERT INTO fields (class_id, name, field_type, modifiers, summary, deprecated, constant_value)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for field in &class.fields {
                stmt.execute(params![
                    class_id,
                    field.name,
                    field.field_type,
                    field.modifiers,
                    field.summary,
                    field.deprecated,
                    field.constant_value
                ])?;
            }

            let mut stmt = tx.prepare(
                "INSERT INTO constructors (class_id, signature, summary, parameters, throws_list,
                 annotations, deprecated)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for constructor in &class.constructors {
                stmt.execute(params![
                    class_id,
                    constructor.signature,
                    constructor.summary,
                    serde_json::to_string(&constructor.parameters)?,
                    serde_json::to_string(&constructor.throws_list)?,
                    serde_json::to_string(&constructor.annotations)?,
                    constructor.deprecated
                ])?;
            }
        }

        tx.commit()?;

        Ok(Some(ClassRecord {
            id: class_id,
            package_id: package.id,
            library_name: package.library_name.clone(),
            version: package.version.clone(),
            fqcn,
            simple_name: simple_name.to_string(),
            kind: class.kind,
            modifiers: class.modifiers.clone(),
            summary: class.summary.clone(),
            description: class.description.clone(),
            super_class: class.super_class.clone(),
            interfaces: class.interfaces.clone(),
            deprecated: class.deprecated,
            deprecated_message: class.deprecated_message.clone(),
            annotations: class.annotations.clone(),
            source_url: class.source_url.clone(),
            created_at: now,
        }))
    }

    fn clear_library_version(&mut self, library: &str, version: &str) -> StorageResult<usize> {
        let removed = self.conn.execute(
            "DELETE FROM packages WHERE library_name = ?1 AND version = ?2",
            params![library, version],
        )?;
        Ok(removed)
    }

    // ===== Existence checks =====

    fn package_exists(
        &self,
        library: &str,
        version: &str,
        package_name: &str,
    ) -> StorageResult<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM packages WHERE library_name = ?1 AND version = ?2 AND package_name = ?3",
                params![library, version, package_name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn class_exists(&self, library: &str, version: &str, fqcn: &str) -> StorageResult<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM classes WHERE library_name = ?1 AND version = ?2 AND fqcn = ?3",
                params![library, version, fqcn],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn exists_for_version(&self, library: &str, version: &str) -> StorageResult<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM packages WHERE library_name = ?1 AND version = ?2 LIMIT 1",
                params![library, version],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    // ===== Reads =====

    fn get_package(
        &self,
        library: &str,
        version: &str,
        package_name: &str,
    ) -> StorageResult<Option<PackageRecord>> {
        let sql = format!(
            "SELECT {} FROM packages WHERE library_name = ?1 AND version = ?2 AND package_name = ?3",
            PACKAGE_COLUMNS
        );
        let package = self
            .conn
            .query_row(&sql, params![library, version, package_name], package_from_row)
            .optional()?;
        Ok(package)
    }

    fn get_class(
        &self,
        library: &str,
        version: &str,
        fqcn: &str,
    ) -> StorageResult<Option<ClassRecord>> {
        let sql = format!(
            "SELECT {} FROM classes WHERE library_name = ?1 AND version = ?2 AND fqcn = ?3",
            CLASS_COLUMNS
        );
        let class = self
            .conn
            .query_row(&sql, params![library, version, fqcn], class_from_row)
            .optional()?;
        Ok(class)
    }

    fn get_classes(&self, library: &str, version: &str) -> StorageResult<Vec<ClassRecord>> {
        let sql = format!(
            "SELECT {} FROM classes WHERE library_name = ?1 AND version = ?2 ORDER BY fqcn",
            CLASS_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let classes = stmt
            .query_map(params![library, version], class_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(classes)
    }

    fn get_methods(&self, class_id: i64) -> StorageResult<Vec<Method>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, signature, return_type, summary, description, parameters, throws_list,
             annotations, deprecated, deprecated_message
             FROM methods WHERE class_id = ?1 ORDER BY id",
        )?;

        let methods = stmt
            .query_map(params![class_id], |row| {
                Ok(Method {
                    name: row.get(0)?,
                    signature: row.get(1)?,
                    return_type: row.get(2)?,
                    summary: row.get(3)?,
                    description: row.get(4)?,
                    parameters: decode_list::<Parameter>(&row.get::<_, String>(5)?),
                    throws_list: decode_list(&row.get::<_, String>(6)?),
                    annotations: decode_list(&row.get::<_, String>(7)?),
                    deprecated: row.get(8)?,
                    deprecated_message: row.get(9)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(methods)
    }

    fn get_fields(&self, class_id: i64) -> StorageResult<Vec<Field>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, field_type, modifiers, summary, deprecated, constant_value
             FROM fields WHERE class_id = ?1 ORDER BY id",
        )?;

        let fields = stmt
            .query_map(params![class_id], |row| {
                Ok(Field {
                    name: row.get(0)?,
                    field_type: row.get(1)?,
                    modifiers: row.get(2)?,
                    summary: row.get(3)?,
                    deprecated: row.get(4)?,
                    constant_value: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(fields)
    }

    fn get_constructors(&self, class_id: i64) -> StorageResult<Vec<Constructor>> {
        let mut stmt = self.conn.prepare(
            "SELECT signature, summary, parameters, throws_list, annotations, deprecated
             FROM constructors WHERE class_id = ?1 ORDER BY id",
        )?;

        let constructors = stmt
            .query_map(params![class_id], |row| {
                Ok(Constructor {
                    signature: row.get(0)?,
                    summary: row.get(1)?,
                    parameters: decode_list(&row.get::<_, String>(2)?),
                    throws_list: decode_list(&row.get::<_, String>(3)?),
                    annotations: decode_list(&row.get::<_, String>(4)?),
                    deprecated: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(constructors)
    }

    // ===== Statistics =====

    fn get_version_stats(&self, library: &str, version: &str) -> StorageResult<VersionStats> {
        Ok(VersionStats {
            library_name: library.to_string(),
            version: version.to_string(),
            packages: self.count(
                "SELECT COUNT(*) FROM packages WHERE library_name = ?1 AND version = ?2",
                library,
                version,
            )?,
            classes: self.count(
                "SELECT COUNT(*) FROM classes WHERE library_name = ?1 AND version = ?2",
                library,
                version,
            )?,
            methods: self.count(
                "SELECT COUNT(*) FROM methods m JOIN classes c ON m.class_id = c.id
                 WHERE c.library_name = ?1 AND c.version = ?2",
                library,
                version,
            )?,
            fields: self.count(
                "SELECT COUNT(*) FROM fields f JOIN classes c ON f.class_id = c.id
                 WHERE c.library_name = ?1 AND c.version = ?2",
                library,
                version,
            )?,
            constructors: self.count(
                "SELECT COUNT(*) FROM constructors k JOIN classes c ON k.class_id = c.id
                 WHERE c.library_name = ?1 AND c.version = ?2",
                library,
                version,
            )?,
        })
    }

    fn get_library_names(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT library_name FROM packages ORDER BY library_name")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    fn get_versions(&self, library: &str) -> StorageResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT version FROM packages WHERE library_name = ?1 ORDER BY version",
        )?;
        let versions = stmt
            .query_map(params![library], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(versions)
    }
}
