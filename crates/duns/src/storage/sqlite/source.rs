//! SQLite data source implementation.
//!
//! Implements `DunDataSource` from `duns_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use duns_core::dun::Dun;
use duns_core::storage::{DataSourceError, DunDataSource, Result};

use super::conversions::{completed_to_int, row_to_dun};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based local mirror of the remote store.
///
/// All statements run on the connection's background thread, so callers
/// never block the async runtime on disk I/O.
pub struct SqliteDataSource {
    conn: Connection,
}

impl SqliteDataSource {
    /// Opens a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| DataSourceError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| DataSourceError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    /// Reads a marker from the `meta` table.
    pub async fn get_meta(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();

        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_META, [&key], |row| row.get(0))
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    /// Writes a marker to the `meta` table, replacing any previous value.
    pub async fn set_meta(&self, key: &str, value: &str) -> Result<()> {
        let key = key.to_string();
        let value = value.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::UPSERT_META, rusqlite::params![key, value])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_completed(&self, id: &str, completed: bool) -> Result<()> {
        let id_str = id.to_string();
        let flag = completed_to_int(completed);

        self.conn
            .call(move |conn| {
                conn.execute(schema::UPDATE_COMPLETED, rusqlite::params![id_str, flag])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn execute(&self, sql: &'static str) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(sql, []).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl DunDataSource for SqliteDataSource {
    async fn get_duns(&self) -> Result<Vec<Dun>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_DUNS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_dun).map_err(wrap_err)?;

                let mut duns = Vec::new();
                for row_result in rows {
                    duns.push(row_result.map_err(wrap_err)?);
                }
                Ok(duns)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_dun(&self, id: &str) -> Result<Dun> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_DUN_BY_ID).map_err(wrap_err)?;
                stmt.query_row([&id_str], row_to_dun).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn save_dun(&self, dun: &Dun) -> Result<()> {
        let id = dun.id.clone();
        let title = dun.title.clone();
        let description = dun.description.clone();
        let completed = completed_to_int(dun.completed);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_DUN,
                    rusqlite::params![id, title, description, completed],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, dun.id.as_str()))
    }

    async fn complete_dun(&self, dun: &Dun) -> Result<()> {
        self.update_completed(&dun.id, true).await
    }

    async fn complete_dun_by_id(&self, id: &str) -> Result<()> {
        self.update_completed(id, true).await
    }

    async fn activate_dun(&self, dun: &Dun) -> Result<()> {
        self.update_completed(&dun.id, false).await
    }

    async fn activate_dun_by_id(&self, id: &str) -> Result<()> {
        self.update_completed(id, false).await
    }

    async fn clear_completed_duns(&self) -> Result<()> {
        self.execute(schema::DELETE_COMPLETED_DUNS).await
    }

    async fn delete_all_duns(&self) -> Result<()> {
        self.execute(schema::DELETE_ALL_DUNS).await
    }

    async fn delete_dun(&self, id: &str) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_DUN, [&id_str])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }
}
