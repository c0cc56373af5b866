//! Deployment orchestration: ordered, fail-fast execution of the plan

use crate::confirm::ConfirmPrompt;
use crate::error::StepError;
use crate::report::{DeployReport, RunStatus, StepOutcome};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use strata_core::project::read_resource;
use strata_core::substitute::{count_placeholders, substitute_database};
use strata_core::{CoreResult, DeploymentStep, Environment, DEPLOYMENT_PLAN};
use strata_db::{Database, DbError};

/// Default per-step execution timeout
pub const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(300);

/// Applies the deployment plan to one environment
pub struct Deployer {
    environment: Environment,
    root: PathBuf,
    plan: Vec<DeploymentStep>,
    db: Arc<dyn Database>,
    timeout: Duration,
}

impl std::fmt::Debug for Deployer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deployer")
            .field("environment", &self.environment)
            .field("root", &self.root)
            .field("steps", &self.plan.len())
            .field("backend", &self.db.db_type())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Deployer {
    /// Create a deployer for `environment`, reading resources beneath `root`.
    ///
    /// Fails with `CoreError::InvalidEnvironment` for names outside the
    /// supported set.
    pub fn new(
        environment: &str,
        root: impl Into<PathBuf>,
        db: Arc<dyn Database>,
    ) -> CoreResult<Self> {
        let environment: Environment = environment.parse()?;
        Ok(Self {
            environment,
            root: root.into(),
            plan: DEPLOYMENT_PLAN.to_vec(),
            db,
            timeout: DEFAULT_STEP_TIMEOUT,
        })
    }

    /// Replace the deployment plan
    pub fn with_plan(mut self, plan: Vec<DeploymentStep>) -> Self {
        self.plan = plan;
        self
    }

    /// Bound each backend call by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Target database identifier for this environment
    pub fn database(&self) -> &'static str {
        self.environment.database_name()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn plan(&self) -> &[DeploymentStep] {
        &self.plan
    }

    /// Load a resource and rewrite the placeholder database to this
    /// environment's database
    pub fn substitute(&self, path: &str) -> CoreResult<String> {
        let content = read_resource(&self.root, path)?;
        log::debug!(
            "{}: {} placeholder occurrence(s) -> {}",
            path,
            count_placeholders(&content),
            self.database()
        );
        Ok(substitute_database(&content, self.database()).into_owned())
    }

    /// Deploy a single step. Never fails outright; errors become
    /// `StepOutcome::Failed`.
    pub async fn execute_step(&self, step: &DeploymentStep, dry_run: bool) -> StepOutcome {
        println!("  {} [{}]", step.description, step.layer);
        println!("     File: {}", step.path);
        println!("     Database: {}", self.database());

        let outcome = self.try_execute_step(step, dry_run).await;
        match &outcome {
            StepOutcome::Executed => println!("     \u{2713} Success"),
            StepOutcome::Prepared => {
                println!("     \u{2713} [DRY RUN] Content prepared (not executing)")
            }
            StepOutcome::PreparedFallback { reason } => {
                log::warn!("Execution backend unavailable: {}", reason);
                println!("     \u{26a0} {}. Using dry-run mode.", reason);
                println!("     \u{2713} [DRY RUN] SQL content prepared (execute manually)");
            }
            StepOutcome::Failed(e) => println!("     \u{2717} Error: {}", e),
        }
        outcome
    }

    async fn try_execute_step(&self, step: &DeploymentStep, dry_run: bool) -> StepOutcome {
        let sql = match self.substitute(step.path) {
            Ok(sql) => sql,
            Err(e) => return StepOutcome::Failed(e.into()),
        };

        if dry_run {
            return StepOutcome::Prepared;
        }

        let start = Instant::now();
        let result = tokio::time::timeout(self.timeout, self.db.execute_batch(&sql)).await;
        log::debug!("{} finished in {}ms", step.path, start.elapsed().as_millis());

        match result {
            Ok(Ok(())) => StepOutcome::Executed,
            Ok(Err(e @ DbError::Unavailable { .. })) => StepOutcome::PreparedFallback {
                reason: e.to_string(),
            },
            Ok(Err(e)) => StepOutcome::Failed(StepError::Execution(e)),
            Err(_) => StepOutcome::Failed(StepError::Timeout {
                secs: self.timeout.as_secs(),
            }),
        }
    }

    /// Apply the whole plan in order, stopping at the first failure.
    ///
    /// Production runs ask `confirm` first; anything but an affirmative
    /// answer cancels before any step runs.
    pub async fn run_plan(&self, dry_run: bool, confirm: &mut dyn ConfirmPrompt) -> DeployReport {
        let total = self.plan.len();
        let mut report = DeployReport {
            environment: self.environment,
            database: self.database(),
            succeeded: 0,
            total,
            status: RunStatus::Completed,
            dry_run,
        };

        println!("\n{}", "=".repeat(70));
        println!(
            "DEPLOYMENT - Environment: {}{}",
            self.environment.as_str().to_uppercase(),
            if dry_run { " [DRY RUN]" } else { "" }
        );
        println!("Database: {}", self.database());
        println!("{}\n", "=".repeat(70));

        if self.environment.is_production()
            && !confirm.confirm("\u{26a0}  WARNING: Deploying to PRODUCTION. Continue?")
        {
            println!("Deployment cancelled.");
            report.status = RunStatus::Cancelled;
            return report;
        }

        for (idx, step) in self.plan.iter().enumerate() {
            match self.execute_step(step, dry_run).await {
                StepOutcome::Failed(e) => {
                    println!("\u{26a0}  Failed to deploy {}", step.path);
                    report.status = RunStatus::FailedAtStep {
                        step: idx + 1,
                        path: step.path,
                        error: e.to_string(),
                    };
                    break;
                }
                _ => report.succeeded += 1,
            }
        }

        report
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
