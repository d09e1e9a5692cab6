pub mod types;
pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::config::{self, Config};
use crate::utils::error::BuildResult;
use types::{Cli, Commands};

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or_default();

    let (verbose, quiet) = match &command {
        Commands::Build { verbose, quiet, .. } => (*verbose, *quiet),
        _ => (false, false),
    };
    logging::init_logging(logging::log_level(cli.debug, verbose, quiet));
    logging::configure_backtrace(cli.trace);

    let result = load_cli_config(&cli).and_then(|config| match command {
        Commands::Build { drafts, .. } => commands::handle_build_command(&config, drafts),
        Commands::Check { drafts } => commands::handle_check_command(&config, drafts),
        Commands::Clean {} => commands::handle_clean_command(&config),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}: {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}

/// Load the configuration and apply command line overrides
fn load_cli_config(cli: &Cli) -> BuildResult<Config> {
    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = config::load_config(&source, cli.config.as_deref())?;

    if let Some(destination) = &cli.destination {
        config.destination = destination.clone();
        config::validate_config(&config)?;
    }

    Ok(config)
}
