//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Checks that ffprobe can be started.
pub mod check;

/// Probes a file and prints the parsed sections.
pub mod info;
