// ============================================================================
// probekit-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffprobe Command-Line Tool
//
// This module owns every child process probekit starts. Parsing is delegated
// to `crate::parser`; this layer only spawns, pipes and reaps.
//
// KEY COMPONENTS:
// - FfprobeExecutor trait and its process-backed implementation
// - Dependency checking

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Spawns ffprobe and reconciles its exit status with the parsed output
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor, probe};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that `tool` can be started.
///
/// Runs `<tool> -version` with all output discarded. Only the ability to spawn
/// is checked; the exit status is ignored.
///
/// # Returns
///
/// * `Ok(())` - If the command started
/// * `Err(CoreError::DependencyNotFound)` - If the command is not found
/// * `Err(CoreError::CommandStart)` - If the command exists but fails to start
pub fn check_dependency(tool: &Path) -> CoreResult<()> {
    let tool_name = tool.display().to_string();

    let result = Command::new(tool)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", tool_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", tool_name);
            Err(CoreError::DependencyNotFound(tool_name))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", tool_name, e);
            Err(CoreError::CommandStart(tool_name, e))
        }
    }
}
