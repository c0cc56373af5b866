//! Step and run outcomes

use crate::error::StepError;
use strata_core::Environment;

/// Result of a single deployment step
#[derive(Debug)]
pub enum StepOutcome {
    /// SQL was executed by the backend
    Executed,
    /// Dry run: SQL was prepared but not executed
    Prepared,
    /// Backend not installed: SQL was prepared for manual execution
    PreparedFallback { reason: String },
    /// Step failed; the run stops here
    Failed(StepError),
}

impl StepOutcome {
    /// Whether the run may continue past this step
    pub fn is_success(&self) -> bool {
        !matches!(self, StepOutcome::Failed(_))
    }
}

/// Terminal state of a deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Every step succeeded
    Completed,
    /// Production confirmation was declined; nothing ran
    Cancelled,
    /// Step `step` (1-based) failed; later steps were not attempted
    FailedAtStep {
        step: usize,
        path: &'static str,
        error: String,
    },
}

/// Summary of a deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub environment: Environment,
    pub database: &'static str,
    pub succeeded: usize,
    pub total: usize,
    pub status: RunStatus,
    pub dry_run: bool,
}

impl DeployReport {
    /// Overall success: every planned step succeeded
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Completed && self.succeeded == self.total
    }

    /// Print the operator-facing summary block
    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(70));
        match &self.status {
            RunStatus::Completed => {
                println!(
                    "\u{2713} Deployment complete! ({}/{} files){}",
                    self.succeeded,
                    self.total,
                    if self.dry_run { " [DRY RUN]" } else { "" }
                );
            }
            RunStatus::Cancelled => {
                println!(
                    "Deployment cancelled ({}/{} files)",
                    self.succeeded, self.total
                );
            }
            RunStatus::FailedAtStep { step, path, .. } => {
                println!(
                    "\u{26a0} Deployment incomplete ({}/{} files), stopped at step {}: {}",
                    self.succeeded, self.total, step, path
                );
            }
        }
        println!("Environment: {}", self.environment.as_str().to_uppercase());
        println!("Database: {}", self.database);
        println!("{}\n", "=".repeat(70));
    }
}
