//! DuckDB database backend implementation
//!
//! Used for local smoke deployments of the plan against an embedded database.

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use duckdb::{params, Connection, InterruptHandle};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// DuckDB database backend
///
/// Batches run on tokio's blocking pool. Dropping an unfinished
/// `execute_batch` future interrupts the running query.
pub struct DuckDbBackend {
    conn: Arc<Mutex<Connection>>,
}

/// Interrupts the connection's current query unless disarmed
struct InterruptOnDrop(Option<Arc<InterruptHandle>>);

impl InterruptOnDrop {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for InterruptOnDrop {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            log::debug!("Interrupting unfinished DuckDB batch");
            handle.interrupt();
        }
    }
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    /// Check if a relation exists in `schema`
    pub fn relation_exists(&self, schema: &str, name: &str) -> DbResult<bool> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = ? AND table_name = ?",
            params![schema, name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Check if a schema exists
    pub fn schema_exists(&self, schema: &str) -> DbResult<bool> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM information_schema.schemata WHERE schema_name = ?",
            params![schema],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

#[async_trait]
impl Database for DuckDbBackend {
    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        let guard = InterruptOnDrop(Some(self.lock()?.interrupt_handle()));
        let conn = Arc::clone(&self.conn);
        let sql = sql.to_string();

        let result = tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| DbError::MutexPoisoned(e.to_string()))?;
            conn.execute_batch(&sql)
                .map_err(|e| DbError::ExecutionError(e.to_string()))
        })
        .await;
        guard.disarm();

        result.map_err(|e| DbError::ExecutionError(format!("DuckDB task failed: {}", e)))?
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
