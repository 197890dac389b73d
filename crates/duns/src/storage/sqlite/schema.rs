//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite data source,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- One row per dun, keyed by its id
CREATE TABLE IF NOT EXISTS duns (
    entryid TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_duns_completed ON duns(completed);

-- Key/value markers about the database itself
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub const UPSERT_DUN: &str = r#"
INSERT OR REPLACE INTO duns (entryid, title, description, completed)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_DUNS: &str = r#"
SELECT entryid, title, description, completed
FROM duns
ORDER BY entryid ASC
"#;

pub const SELECT_DUN_BY_ID: &str = r#"
SELECT entryid, title, description, completed
FROM duns
WHERE entryid = ?1
"#;

pub const UPDATE_COMPLETED: &str = r#"
UPDATE duns
SET completed = ?2
WHERE entryid = ?1
"#;

pub const DELETE_COMPLETED_DUNS: &str = r#"
DELETE FROM duns
WHERE completed = 1
"#;

pub const DELETE_ALL_DUNS: &str = r#"
DELETE FROM duns
"#;

pub const DELETE_DUN: &str = r#"
DELETE FROM duns
WHERE entryid = ?1
"#;

pub const SELECT_META: &str = r#"
SELECT value
FROM meta
WHERE key = ?1
"#;

pub const UPSERT_META: &str = r#"
INSERT OR REPLACE INTO meta (key, value)
VALUES (?1, ?2)
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS duns"));
        assert!(CREATE_TABLES.contains("entryid TEXT PRIMARY KEY"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS meta"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(UPSERT_DUN.contains("INSERT OR REPLACE"));
        assert!(SELECT_DUNS.contains("ORDER BY entryid"));
        assert!(SELECT_DUN_BY_ID.contains("WHERE entryid = ?1"));
        assert!(UPDATE_COMPLETED.contains("UPDATE"));
        assert!(DELETE_COMPLETED_DUNS.contains("completed = 1"));
        assert!(DELETE_ALL_DUNS.contains("DELETE"));
        assert!(DELETE_DUN.contains("WHERE entryid = ?1"));
        assert!(SELECT_META.contains("WHERE key = ?1"));
        assert!(UPSERT_META.contains("INSERT OR REPLACE INTO meta"));
    }
}
