//! Error types for strata-deploy

use strata_core::CoreError;
use strata_db::DbError;
use thiserror::Error;

/// Why a single deployment step failed
#[derive(Error, Debug)]
pub enum StepError {
    /// Resource missing or unreadable
    #[error(transparent)]
    Resource(#[from] CoreError),

    /// Backend rejected the SQL
    #[error(transparent)]
    Execution(#[from] DbError),

    /// S001: Backend did not finish within the step timeout
    #[error("[S001] Execution timed out after {secs}s")]
    Timeout { secs: u64 },
}
