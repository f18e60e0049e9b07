//! Durable SQLite-backed key/value storage.
//!
//! # Responsibility
//! - Persist the flat key/value namespace in a single-table SQLite file.
//! - Bootstrap the table and connection settings before first use.
//!
//! # Invariants
//! - Returned backends always have the `kv` table available.
//! - One row per key; writes upsert the whole value.

use super::{StorageBackend, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// SQLite-backed storage port.
///
/// The database holds exactly one table, `kv(key, value)`, which is the same
/// shape browsers use underneath `localStorage`. Collections are stored as
/// JSON arrays in the `value` column; this module never inspects them.
pub struct SqliteBackend {
    conn: Connection,
}

impl StorageBackend for SqliteBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Opens a storage file and prepares it for repository use.
///
/// # Side effects
/// - Creates the file and the `kv` table when missing.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<SqliteBackend> {
    open_with("file", || Connection::open(path))
}

/// Opens a throwaway in-memory storage database.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store_in_memory() -> StoreResult<SqliteBackend> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &str,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<SqliteBackend> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode={mode}");

    let result = open().map_err(Into::into).and_then(bootstrap_connection);
    match result {
        Ok(backend) => {
            info!(
                "event=store_open module=store status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(backend)
        }
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode={mode} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: Connection) -> StoreResult<SqliteBackend> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
    )?;
    Ok(SqliteBackend { conn })
}
