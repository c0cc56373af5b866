//! Deploy command implementation

use anyhow::Result;
use strata_core::Environment;
use strata_deploy::{Deployer, LineConfirm};

use crate::cli::Cli;
use crate::commands::common::ExitCode;
use crate::context::RuntimeContext;

/// Deploy the full plan to the environment named on the command line
pub(crate) async fn execute(cli: &Cli) -> Result<()> {
    // Reject unknown environments before touching the project or backend.
    if let Err(e) = cli.environment.parse::<Environment>() {
        eprintln!("\u{2717} Error: {}", e);
        return Err(ExitCode(1).into());
    }

    let ctx = RuntimeContext::new(&cli.global)?;
    let deployer = Deployer::new(&cli.environment, ctx.root.clone(), ctx.db.clone())?
        .with_timeout(ctx.config.executor.timeout());
    ctx.verbose(&format!("{:?}", deployer));

    let mut confirm = LineConfirm::stdin();
    let report = deployer.run_plan(cli.dry_run, &mut confirm).await;
    report.print_summary();

    if report.is_success() {
        Ok(())
    } else {
        Err(ExitCode(1).into())
    }
}
