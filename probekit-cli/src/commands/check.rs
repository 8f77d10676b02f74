//! Implementation of the 'check' subcommand.

use crate::error::{CliErrorContext, CliResult};
use crate::output::print_success;

use probekit_core::{ProbeConfig, check_dependency};

/// Verifies that the configured ffprobe can be started.
pub fn run_check(config: &ProbeConfig) -> CliResult<()> {
    config.validate()?;
    check_dependency(&config.ffprobe_path).cli_context("Dependency check failed")?;
    print_success(&format!("{} is available", config.tool_name()));
    Ok(())
}
