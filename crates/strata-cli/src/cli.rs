//! CLI argument definitions using clap derive API

use clap::{Args, Parser};
use std::path::PathBuf;

/// Strata - deploy the layered analytics warehouse schema to an environment
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target environment (dev, qa, prod)
    pub environment: String,

    /// Show what would be executed without actually executing
    #[arg(long)]
    pub dry_run: bool,

    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every invocation
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory containing the sql/ resources (default: install location)
    #[arg(short = 'p', long, env = "STRATA_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Override config file path (default: <project-dir>/strata.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
