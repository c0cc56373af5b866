//! Database trait definition

use crate::duckdb::DuckDbBackend;
use crate::error::DbResult;
use crate::snowflake::SnowCliBackend;
use async_trait::async_trait;
use std::sync::Arc;
use strata_core::{ExecutorConfig, ExecutorKind};

/// Execution collaborator for substituted SQL
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a block of SQL statements against the target database.
    ///
    /// Returns `DbError::Unavailable` when the execution mechanism is not
    /// present on this host.
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}

/// Build the backend selected by the executor configuration
pub fn connect(config: &ExecutorConfig) -> DbResult<Arc<dyn Database>> {
    let db: Arc<dyn Database> = match config.kind {
        ExecutorKind::Snowflake => Arc::new(SnowCliBackend::new(
            &config.program,
            config.connection.clone(),
        )),
        ExecutorKind::DuckDb => Arc::new(DuckDbBackend::new(&config.path)?),
    };
    log::debug!("Using {} execution backend", db.db_type());
    Ok(db)
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
