// ============================================================================
// probekit-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console or File Logging for the CLI
//
// Records from probekit-core and the CLI go through the `log` facade. By
// default they are written to stderr with fern so they never mix with the
// probe output on stdout. With --log-dir they go to a timestamped file via
// probekit-core's log4rs setup instead.
//
// LEVELS:
// - info (default): what is being probed
// - debug (--verbose): command lines, parse summaries, discarded exit statuses

use crate::error::CliResult;
use log::LevelFilter;
use probekit_core::CoreError;
use probekit_core::file_logging::setup_file_logging;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("probekit_{}.log", probekit::logging::get_timestamp());
/// assert!(log_filename.starts_with("probekit_"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

#[must_use]
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Path of the log file for a run started now.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("probekit_{}.log", get_timestamp()))
}

/// Installs the global logger.
///
/// Returns the log file path when logging to a file.
pub fn init_logging(level: LevelFilter, log_dir: Option<&Path>) -> CliResult<Option<PathBuf>> {
    match log_dir {
        Some(dir) => {
            let path = log_file_path(dir);
            setup_file_logging(&path, level).map_err(|e| {
                CoreError::OperationFailed(format!(
                    "Failed to set up file logging to {}: {:#}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Some(path))
        }
        None => {
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}",
                        chrono::Local::now().format("%H:%M:%S"),
                        record.level(),
                        message
                    ))
                })
                .level(level)
                .chain(std::io::stderr())
                .apply()
                .map_err(|e| {
                    CoreError::OperationFailed(format!("Failed to set up console logging: {e}"))
                })?;
            Ok(None)
        }
    }
}
