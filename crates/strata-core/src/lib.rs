//! strata-core - Core library for Strata
//!
//! This crate provides the environment model, the static deployment plan,
//! placeholder substitution, configuration parsing, and project root
//! resolution shared by the deployment orchestrator and the CLI.

pub mod config;
pub mod environment;
pub mod error;
pub mod plan;
pub mod project;
pub mod substitute;

pub use config::{Config, ExecutorConfig, ExecutorKind};
pub use environment::Environment;
pub use error::{CoreError, CoreResult};
pub use plan::{DeploymentStep, Layer, DEPLOYMENT_PLAN};
pub use substitute::{substitute_database, PLACEHOLDER_DATABASE};
