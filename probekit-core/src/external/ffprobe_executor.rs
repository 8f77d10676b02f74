//! Runs ffprobe and feeds its standard output to the section parser.
//!
//! One call spawns exactly one child process:
//!
//! 1. `<ffprobe> -show_format -show_streams <path>` is spawned with stdout
//!    piped and stdin/stderr attached to the null device.
//! 2. The pipe is parsed until end of stream or the first error.
//! 3. The pipe is closed, then the child is always waited on.
//! 4. The parse outcome and the exit status are reconciled: a parse error
//!    wins over everything, a failing exit status wins over a good parse.
//!
//! There is no timeout. A child that never exits blocks the caller.

use crate::config::{ProbeConfig, SHOW_ARGS};
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::media::ProbeResult;
use crate::parser::parse_probe_output;

use std::io::{self, BufReader};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Something that can probe a media file.
///
/// Consumers depend on this trait so tests can substitute canned results.
pub trait FfprobeExecutor {
    fn probe(&self, input_path: &Path) -> CoreResult<ProbeResult>;
}

/// Default executor that spawns the configured ffprobe binary.
#[derive(Debug, Clone, Default)]
pub struct CommandFfprobeExecutor {
    config: ProbeConfig,
}

impl CommandFfprobeExecutor {
    #[must_use]
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Builds the ffprobe invocation for `input_path`.
    ///
    /// The path is passed through untouched; whether it exists is for
    /// ffprobe to report.
    fn command(&self, input_path: &Path) -> Command {
        let mut cmd = Command::new(&self.config.ffprobe_path);
        cmd.args(SHOW_ARGS)
            .arg(input_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        cmd
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn probe(&self, input_path: &Path) -> CoreResult<ProbeResult> {
        self.config.validate()?;
        let tool = self.config.tool_name();

        let mut cmd = self.command(input_path);
        log::debug!("Running ffprobe on {}: {:?}", input_path.display(), cmd);

        let mut child = cmd.spawn().map_err(|e| {
            log::debug!("Failed to spawn {}: {}", tool, e);
            command_start_error(&tool, e)
        })?;

        // The reader owns the pipe and is consumed by the parser, so the pipe
        // is closed here on every path before the wait below.
        let parsed = match child.stdout.take() {
            Some(stdout) => parse_probe_output(BufReader::new(stdout)),
            None => Err(CoreError::OperationFailed(format!(
                "{tool} standard output was not captured"
            ))),
        };

        let status = child.wait();
        reconcile(&tool, parsed, status)
    }
}

/// Combines the parse outcome with the child's exit status.
///
/// - parse error: returned as is, the exit status is only logged
/// - good parse, failing exit: [`CoreError::CommandFailed`] carrying the result
/// - good parse, wait failed: the wait's I/O error
fn reconcile(
    tool: &str,
    parsed: CoreResult<ProbeResult>,
    status: io::Result<ExitStatus>,
) -> CoreResult<ProbeResult> {
    match (parsed, status) {
        (Ok(result), Ok(status)) if status.success() => Ok(result),
        (Ok(result), Ok(status)) => {
            log::debug!(
                "{} {} after printing {} stream(s)",
                tool,
                status,
                result.stream_count()
            );
            Err(command_failed_error(tool, status, Some(result)))
        }
        (Ok(_), Err(wait_err)) => Err(CoreError::Io(wait_err)),
        (Err(err), Ok(status)) => {
            if !status.success() {
                log::debug!("Ignoring {} {} after parse failure: {}", tool, status, err);
            }
            Err(err)
        }
        (Err(err), Err(wait_err)) => {
            log::warn!("Failed to wait for {}: {}", tool, wait_err);
            Err(err)
        }
    }
}

/// Probes `input_path` with ffprobe, honouring `PROBEKIT_FFPROBE`.
pub fn probe(input_path: impl AsRef<Path>) -> CoreResult<ProbeResult> {
    CommandFfprobeExecutor::new(ProbeConfig::from_env()).probe(input_path.as_ref())
}
