//! Runtime context for the deploy command

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use strata_core::project::resolve_root;
use strata_core::Config;
use strata_db::Database;

use crate::cli::GlobalArgs;

/// Resolved resource root, configuration, and execution backend
pub(crate) struct RuntimeContext {
    /// Directory the plan's resource paths are relative to
    pub(crate) root: PathBuf,

    /// Loaded configuration
    pub(crate) config: Config,

    /// Execution backend
    pub(crate) db: Arc<dyn Database>,

    /// Verbose output enabled
    pub(crate) verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub(crate) fn new(args: &GlobalArgs) -> Result<Self> {
        let root = resolve_root(args.project_dir.as_deref())
            .context("Failed to resolve project directory")?;

        let config = if let Some(config_path) = &args.config {
            Config::load(config_path).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(&root).context("Failed to load project configuration")?
        };

        let db = strata_db::connect(&config.executor)
            .context("Failed to create execution backend")?;

        let ctx = Self {
            root,
            config,
            db,
            verbose: args.verbose,
        };
        ctx.verbose(&format!("Resource root: {}", ctx.root.display()));
        ctx.verbose(&format!(
            "Executor: {} (timeout {}s)",
            ctx.config.executor.kind, ctx.config.executor.timeout_secs
        ));
        Ok(ctx)
    }

    /// Print verbose output if enabled
    pub(crate) fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
