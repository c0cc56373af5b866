//! Strata CLI - environment-aware deployment of the layered warehouse schema

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::common::ExitCode;
use commands::deploy;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    if let Err(err) = deploy::execute(&cli).await {
        let code = match err.downcast_ref::<ExitCode>() {
            Some(ExitCode(code)) => *code,
            None => {
                eprintln!("\u{2717} Error: {:#}", err);
                1
            }
        };
        std::process::exit(code);
    }
}

/// Route `log` records from the strata crates to stderr.
///
/// `--verbose` shows debug records; otherwise `RUST_LOG` applies, defaulting
/// to errors only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("strata=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strata=error"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
