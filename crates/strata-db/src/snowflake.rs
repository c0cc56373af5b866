//! Snowflake backend driven through the Snowflake CLI
//!
//! Each batch is submitted as `snow sql -q <sql>`. The child process is killed
//! if the returned future is dropped, so callers can bound a step with a
//! timeout.

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;

/// Snowflake database backend using the `snow` command-line client
#[derive(Debug, Clone)]
pub struct SnowCliBackend {
    program: String,
    connection: Option<String>,
}

impl SnowCliBackend {
    /// Create a backend invoking `program`, optionally with a named connection
    pub fn new(program: &str, connection: Option<String>) -> Self {
        Self {
            program: program.to_string(),
            connection,
        }
    }

    /// Arguments passed to the CLI for one batch
    fn args<'a>(&'a self, sql: &'a str) -> Vec<&'a str> {
        let mut args = vec!["sql", "-q", sql];
        if let Some(conn) = &self.connection {
            args.push("--connection");
            args.push(conn);
        }
        args
    }
}

#[async_trait]
impl Database for SnowCliBackend {
    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        let output = tokio::process::Command::new(&self.program)
            .args(self.args(sql))
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DbError::Unavailable {
                    backend: format!("Snowflake CLI '{}'", self.program),
                    reason: e.to_string(),
                },
                _ => DbError::ConnectionError(format!(
                    "failed to launch '{}': {}",
                    self.program, e
                )),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let detail = if stderr.trim().is_empty() {
            stdout.trim()
        } else {
            stderr.trim()
        };
        let code = output
            .status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string());

        Err(DbError::ExecutionError(format!(
            "{} exited with {}: {}",
            self.program, code, detail
        )))
    }

    fn db_type(&self) -> &'static str {
        "snowflake"
    }
}

#[cfg(test)]
#[path = "snowflake_test.rs"]
mod tests;
