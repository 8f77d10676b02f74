//! Error types for probekit-core.
//!
//! Every failure of a probe surfaces as a [`CoreError`]. The variants follow
//! the life of one invocation: the tool may fail to start, reading its output
//! may fail, the output may violate the section grammar, and finally the tool
//! may exit unsuccessfully.

use crate::media::ProbeResult;
use crate::parser::SectionError;

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for probekit
#[derive(Error, Debug)]
pub enum CoreError {
    /// The external tool could not be started (not found, permission denied, ...).
    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    /// The tool terminated with a non-zero status or was killed by a signal.
    ///
    /// When the output had already been parsed without error, the complete
    /// result is attached in `parsed` so callers can inspect what the tool
    /// printed before failing. The probe itself still counts as failed.
    #[error("{tool} exited unsuccessfully ({status})")]
    CommandFailed {
        tool: String,
        status: ExitStatus,
        parsed: Option<Box<ProbeResult>>,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed probe output: {0}")]
    Section(#[from] SectionError),

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    OperationFailed(String),
}

impl CoreError {
    /// Returns true for errors caused by output that violates the section grammar.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, CoreError::Section(_))
    }

    /// The result parsed before the tool exited unsuccessfully, if any.
    #[must_use]
    pub fn parsed_result(&self) -> Option<&ProbeResult> {
        match self {
            CoreError::CommandFailed { parsed, .. } => parsed.as_deref(),
            _ => None,
        }
    }
}

/// Result type for probekit operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds the error returned when `tool` cannot be spawned.
pub fn command_start_error(tool: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(tool.into(), err)
}

/// Builds the error returned when `tool` exits with a failing `status`.
pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    parsed: Option<ProbeResult>,
) -> CoreError {
    CoreError::CommandFailed {
        tool: tool.into(),
        status,
        parsed: parsed.map(Box::new),
    }
}
