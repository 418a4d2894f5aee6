//! CLI entry point.
//!
//! Parses arguments, sets up logging, composes the context via bootstrap
//! and hands the positional arguments to the download handler.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ythelper_cli::{Cli, CliConfig, CliError, DownloadArgs, EXIT_FAILURE, bootstrap, handlers};
use ythelper_cli::presentation::print_error;

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialize logging")
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let ctx = bootstrap(CliConfig::from_cli(cli))?;
    let args = DownloadArgs {
        mode: &cli.mode,
        url: &cli.url,
        download_path: &cli.download_path,
        custom_name: cli.custom_name.as_deref(),
    };
    handlers::download(&ctx, &args)?;
    Ok(())
}

fn main() -> ExitCode {
    // Load .env before parsing so YTHELPER_* defaults apply
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_FAILURE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("error: {e:#}");
        return ExitCode::from(EXIT_FAILURE);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "download failed");
            print_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
