mod cli;
mod cli_utils;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use cli::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging (default to warn when RUST_LOG is unset)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lbmigrate_cli=warn,lbmigrate_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    info!("lbmigrate {} starting", env!("CARGO_PKG_VERSION"));

    let result = cli_utils::resolve_config(&args).and_then(|config| {
        if args.dry_run {
            commands::plan::run(config, args.json)
        } else {
            commands::migrate::run(config, args.json)
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_failure(&e);
            ExitCode::FAILURE
        }
    }
}
