//! Database schema definitions
//!
//! This module contains all SQL schema definitions for the Javadoc-Harvest database.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- One row per (library, version, package)
CREATE TABLE IF NOT EXISTS packages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    library_name TEXT NOT NULL,
    version TEXT NOT NULL,
    package_name TEXT NOT NULL,
    summary TEXT,
    description TEXT,
    source_url TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE(library_name, version, package_name)
);

CREATE INDEX IF NOT EXISTS idx_packages_library_version ON packages(library_name, version);

-- One row per (library, version, fqcn); owned by a package
CREATE TABLE IF NOT EXISTS classes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    package_id INTEGER NOT NULL REFERENCES packages(id) ON DELETE CASCADE,
    library_name TEXT NOT NULL,
    version TEXT NOT NULL,
    fqcn TEXT NOT NULL,
    simple_name TEXT NOT NULL,
    kind TEXT NOT NULL,
    modifiers TEXT,
    summary TEXT,
    description TEXT,
    super_class TEXT,
    interfaces TEXT NOT NULL DEFAULT '[]',
    deprecated INTEGER NOT NULL DEFAULT 0,
    deprecated_message TEXT,
    annotations TEXT NOT NULL DEFAULT '[]',
    source_url TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE(library_name, version, fqcn)
);

CREATE INDEX IF NOT EXISTS idx_classes_package ON classes(package_id);
CREATE INDEX IF NOT EXISTS idx_classes_library_version ON classes(library_name, version);

CREATE TABLE IF NOT EXISTS methods (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    class_id INTEGER NOT NULL REFERENCES classes(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    signature TEXT NOT NULL,
    return_type TEXT,
    summary TEXT,
    description TEXT,
    parameters TEXT NOT NULL DEFAULT '[]',
    throws_list TEXT NOT NULL DEFAULT '[]',
    annotations TEXT NOT NULL DEFAULT '[]',
    deprecated INTEGER NOT NULL DEFAULT 0,
    deprecated_message TEXT
);

CREATE INDEX IF NOT EXISTS idx_methods_class ON methods(class_id);

CREATE TABLE IF NOT EXISTS fields (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    class_id INTEGER NOT NULL REFERENCES classes(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    field_type TEXT,
    modifiers TEXT,
    summary TEXT,
    deprecated INTEGER NOT NULL DEFAULT 0,
    constant_value TEXT
);

CREATE INDEX IF NOT EXISTS idx_fields_class ON fields(class_id);

CREATE TABLE IF NOT EXISTS constructors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    class_id INTEGER NOT NULL REFERENCES classes(id) ON DELETE CASCADE,
    signature TEXT NOT NULL,
    summary TEXT,
    parameters TEXT NOT NULL DEFAULT '[]',
    throws_list TEXT NOT NULL DEFAULT '[]',
    annotations TEXT NOT NULL DEFAULT '[]',
    deprecated INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_constructors_class ON constructors(class_id);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_initializes() {
        let conn = Connection::open_in_memory().unwrap();
        let result = initialize_schema(&conn);
        assert!(result.is_ok());
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        initialize_schema(&conn).unwrap();
        let result = initialize_schema(&conn);

        assert!(result.is_ok());
    }

    #[test]
    fn test_tables_exist_after_init() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        for table in ["packages", "classes", "methods", "fields", "constructors"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table {} should exist", table);
        }
    }

    #[test]
    fn test_package_key_is_unique() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        let insert = "INSERT INTO packages (library_name, version, package_name, source_url, created_at)
                      VALUES ('lib', '1.0', 'com.example', 'u', 't')";
        conn.execute(insert, []).unwrap();
        assert!(conn.execute(insert, []).is_err());
    }
}
