//! Configuration types and parsing for strata.yml
//!
//! The file is optional. Without it Strata deploys through the Snowflake CLI
//! with a five minute timeout per step.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// File name looked up in the resource root
pub const CONFIG_FILE_NAME: &str = "strata.yml";

/// Project configuration from strata.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Execution collaborator settings
    #[serde(default)]
    pub executor: ExecutorConfig,
}

/// Execution backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorKind {
    /// Snowflake CLI (`snow sql -q ...`)
    #[default]
    Snowflake,
    /// Local DuckDB file or in-memory database
    DuckDb,
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutorKind::Snowflake => write!(f, "snowflake"),
            ExecutorKind::DuckDb => write!(f, "duckdb"),
        }
    }
}

/// How substituted SQL is executed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutorConfig {
    /// Backend type
    #[serde(rename = "type", default)]
    pub kind: ExecutorKind,

    /// Snowflake CLI program name or path
    #[serde(default = "default_program")]
    pub program: String,

    /// Named Snowflake CLI connection (`--connection`)
    #[serde(default)]
    pub connection: Option<String>,

    /// DuckDB database path (or `:memory:`)
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Per-step execution timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            kind: ExecutorKind::default(),
            program: default_program(),
            connection: None,
            path: default_db_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ExecutorConfig {
    /// Per-step timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

const DEFAULT_PROGRAM: &str = "snow";
const DEFAULT_DB_PATH: &str = ":memory:";
const DEFAULT_TIMEOUT_SECS: u64 = 300;

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a resource root, falling back to defaults
    /// when no strata.yml is present
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.executor.timeout_secs == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "executor.timeout_secs must be greater than zero".to_string(),
            });
        }

        if self.executor.kind == ExecutorKind::Snowflake && self.executor.program.trim().is_empty()
        {
            return Err(CoreError::ConfigInvalid {
                message: "executor.program cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
