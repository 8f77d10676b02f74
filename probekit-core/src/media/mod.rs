//! Data structures describing a probed media file.

pub mod info;

// Re-export commonly used types
pub use info::{ProbeResult, Section};
