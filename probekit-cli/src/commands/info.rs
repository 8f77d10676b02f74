//! Implementation of the 'info' subcommand.
//!
//! Probes one file through probekit-core and prints the parsed sections, either
//! as a styled listing or as JSON.

use crate::cli::InfoArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output::print_probe_result;

use probekit_core::{CoreError, FfprobeExecutor, ProbeResult};

use log::{debug, info};

/// Serializes a probe result as pretty-printed JSON.
pub fn render_json(result: &ProbeResult) -> CliResult<String> {
    serde_json::to_string_pretty(result)
        .map_err(|e| CoreError::OperationFailed(format!("Failed to serialize probe result: {e}")))
}

/// Probes `args.input_path` and returns the parsed result.
///
/// When ffprobe printed well-formed output but then exited unsuccessfully the
/// command still fails; the sections it printed are logged at debug level.
pub fn probe_input(args: &InfoArgs, executor: &dyn FfprobeExecutor) -> CliResult<ProbeResult> {
    info!("Probing {}", args.input_path.display());

    match executor.probe(&args.input_path) {
        Ok(result) => {
            debug!(
                "Probe finished: {} format option(s), {} stream(s)",
                result.format.len(),
                result.stream_count()
            );
            Ok(result)
        }
        Err(err) => {
            if let Some(parsed) = err.parsed_result() {
                debug!(
                    "Output parsed before ffprobe failed: {} format option(s), {} stream(s)",
                    parsed.format.len(),
                    parsed.stream_count()
                );
            }
            Err(err).cli_with_context(|| format!("Failed to probe {}", args.input_path.display()))
        }
    }
}

/// Runs the info command.
pub fn run_info(args: &InfoArgs, executor: &dyn FfprobeExecutor) -> CliResult<()> {
    let result = probe_input(args, executor)?;

    if args.json {
        println!("{}", render_json(&result)?);
    } else {
        print_probe_result(&args.input_path.display().to_string(), &result);
    }

    Ok(())
}
