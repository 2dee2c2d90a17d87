//! CLI entry point and dispatch logic
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments
//! - Builds CliArgs and discovers Config
//! - Initializes logging
//! - Dispatches to command handlers
//! - Handles all error output

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use super::args::{Cli, Commands};
use super::commands;

use crate::logging::{command_span, init_tracing};
use crate::{CliArgs, Config, CourseworkError, ExitCode};

/// Main CLI execution function.
///
/// This function handles ALL output including errors. It returns `Result<(), ExitCode>`:
/// - On success: returns `Ok(())` after printing any output
/// - On error: prints a user-facing report to stderr, returns `Err(ExitCode)`
///
/// main.rs only calls `std::process::exit(code.as_i32())` on error - it does NOT print.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    let telnet_timeout_secs = match &cli.command {
        Commands::Telnet { timeout, .. } => *timeout,
        _ => None,
    };

    // Only an explicit flag overrides the config file
    let cli_args = CliArgs {
        config_path: cli.config.clone(),
        verbose: cli.verbose.then_some(true),
        log_format: cli.log_format,
        telnet_timeout_secs,
    };

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            let err = CourseworkError::from(err);
            eprintln!("{}", err.display_for_user());
            return Err(err.to_exit_code());
        }
    };

    if let Err(e) = init_tracing(config.verbose(), config.log_format()) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let span = command_span(cli.command.name());
    let _guard = span.enter();
    debug!(config_path = ?config.config_path, "Configuration loaded");

    let result = dispatch(cli.command, &config);

    if let Err(error) = result {
        if let Some(coursework_error) = error.downcast_ref::<CourseworkError>() {
            debug!(error = %error, "Command failed");
            eprintln!("{}", coursework_error.display_for_user());
            return Err(coursework_error.to_exit_code());
        }

        eprintln!("✗ Unexpected error: {error:#}");
        eprintln!("\n  General troubleshooting:");
        eprintln!("    - Run with --verbose for more detailed output");
        eprintln!("    - Run `coursework config` to check the effective configuration");
        return Err(ExitCode::INTERNAL);
    }

    Ok(())
}

fn dispatch(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Unpack { text, json } => commands::execute_unpack_command(text.as_deref(), json),
        Commands::Reverse { text } => commands::execute_reverse_command(text.as_deref()),
        Commands::Telnet { host, port, .. } => {
            commands::execute_telnet_command(&host, port, config)
        }
        Commands::DomainStat { domain, file, json } => {
            commands::execute_domain_stat_command(&domain, file.as_deref(), json)
        }
        Commands::Config { json } => commands::execute_config_command(config, json),
    }
}
