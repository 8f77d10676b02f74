//! Configuration for running ffprobe.
//!
//! The invocation itself is fixed; only the tool to run can be changed, either
//! programmatically or through the `PROBEKIT_FFPROBE` environment variable.

use crate::error::{CoreError, CoreResult};
use std::env;
use std::path::{Path, PathBuf};

// Default constants

/// Program name used when no explicit ffprobe path is configured.
/// Resolved through `PATH` like any other command.
pub const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// Environment variable that overrides the ffprobe binary.
pub const FFPROBE_PATH_ENV_VAR: &str = "PROBEKIT_FFPROBE";

/// Flags requesting the container and per-stream dumps, passed before the path.
pub const SHOW_ARGS: [&str; 2] = ["-show_format", "-show_streams"];

/// Settings for [`CommandFfprobeExecutor`](crate::external::CommandFfprobeExecutor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Program to run in place of `ffprobe`.
    pub ffprobe_path: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeConfig {
    /// Creates a configuration that runs `ffprobe` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE_PATH),
        }
    }

    /// Creates a configuration honouring `PROBEKIT_FFPROBE` when it is set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        match env::var_os(FFPROBE_PATH_ENV_VAR) {
            Some(path) if !path.is_empty() => {
                log::debug!(
                    "Using ffprobe from {}: {}",
                    FFPROBE_PATH_ENV_VAR,
                    Path::new(&path).display()
                );
                Self {
                    ffprobe_path: PathBuf::from(path),
                }
            }
            _ => Self::new(),
        }
    }

    #[must_use]
    pub fn with_ffprobe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffprobe_path = path.into();
        self
    }

    /// Display name of the configured tool, used in errors and logs.
    #[must_use]
    pub fn tool_name(&self) -> String {
        self.ffprobe_path.display().to_string()
    }

    /// Checks that the configuration can be used to spawn a process.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ffprobe_path.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "ffprobe path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
