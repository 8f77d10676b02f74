//! Library component for the probekit CLI application.
//!
//! Holds the argument definitions and command logic used by the binary.

/// Command-line interface definitions using clap
pub mod cli;

/// Command implementations for each subcommand
pub mod commands;

/// Error handling utilities for the CLI
pub mod error;

/// Logging setup and helper functions
pub mod logging;

/// Terminal output helpers
pub mod output;

// Re-exports for convenience
pub use cli::{Cli, Commands, InfoArgs, parse_cli, parse_cli_from};
pub use commands::check::run_check;
pub use commands::info::run_info;

use error::CliResult;
use probekit_core::{CommandFfprobeExecutor, ProbeConfig};

/// Builds the probe configuration from the parsed arguments.
///
/// `--ffprobe` (or `PROBEKIT_FFPROBE`, resolved by clap) replaces the default
/// `ffprobe` from PATH.
pub fn probe_config(cli: &Cli) -> ProbeConfig {
    match &cli.ffprobe_path {
        Some(path) => ProbeConfig::new().with_ffprobe_path(path),
        None => ProbeConfig::new(),
    }
}

/// Installs logging and dispatches to the selected command.
pub fn run(cli: Cli) -> CliResult<()> {
    let level = logging::log_level(cli.verbose);
    if let Some(log_file) = logging::init_logging(level, cli.log_dir.as_deref())? {
        eprintln!("Logging to {}", log_file.display());
    }

    let config = probe_config(&cli);
    log::debug!("Using ffprobe: {}", config.tool_name());

    match &cli.command {
        Commands::Info(args) => run_info(args, &CommandFfprobeExecutor::new(config)),
        Commands::Check => run_check(&config),
    }
}
