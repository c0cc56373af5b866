//! Error types for strata-core

use thiserror::Error;

/// Core error type for Strata
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Environment name outside the supported set
    #[error("[E001] Invalid environment: '{value}'. Must be one of: {valid}")]
    InvalidEnvironment { value: String, valid: String },

    /// E002: Planned SQL resource does not exist
    #[error("[E002] SQL file not found: {path}")]
    ResourceNotFound { path: String },

    /// E003: IO error with file path context
    #[error("[E003] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E004: Configuration file not found
    #[error("[E004] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E005: Failed to parse configuration file
    #[error("[E005] Failed to parse config {path}: {message}")]
    ConfigParseError { path: String, message: String },

    /// E006: Invalid configuration value
    #[error("[E006] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E007: Project directory not found
    #[error("[E007] Project directory not found: {path}")]
    ProjectNotFound { path: String },

    /// E008: IO error
    #[error("[E008] IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
