//! strata-deploy - Deployment orchestration for Strata
//!
//! The `Deployer` walks the static deployment plan in order, substitutes the
//! environment's database into each SQL resource, and hands the result to an
//! execution backend. The first failing step stops the run.

pub mod confirm;
pub mod error;
pub mod report;
pub mod runner;

pub use confirm::{is_affirmative, ConfirmPrompt, LineConfirm};
pub use error::StepError;
pub use report::{DeployReport, RunStatus, StepOutcome};
pub use runner::Deployer;
