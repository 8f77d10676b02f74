//! Log file output for applications built on probekit-core.
//!
//! The library itself only emits records through the `log` facade; installing
//! a logger is left to the application.

pub mod setup;

pub use setup::{LOG_FILE_PATTERN, file_logging_config, setup_file_logging};
