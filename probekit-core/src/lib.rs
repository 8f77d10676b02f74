//! Runs ffprobe against a media file and parses its section-delimited output.
//!
//! ffprobe's default writer prints one `[FORMAT]` block and one `[STREAM]`
//! block per elementary stream, each made of `option=value` lines. This crate
//! spawns the tool, parses that text while it streams in, and returns a
//! [`ProbeResult`]: the container options plus the stream sections in index
//! order. Option values are kept as the strings ffprobe printed.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use probekit_core::{CommandFfprobeExecutor, FfprobeExecutor, ProbeConfig};
//! use std::path::Path;
//!
//! let config = ProbeConfig::new().with_ffprobe_path("/usr/local/bin/ffprobe");
//! let executor = CommandFfprobeExecutor::new(config);
//!
//! let result = executor.probe(Path::new("/path/to/movie.mkv")).unwrap();
//! println!("duration: {:?}", result.format_value("duration"));
//! for stream in result.streams_with("codec_type", "audio") {
//!     println!("audio stream {}", stream["index"]);
//! }
//! ```
//!
//! Output that is already at hand can be parsed without running anything:
//!
//! ```rust
//! use probekit_core::parse_probe_output;
//!
//! let text = "[FORMAT]\nfilename=a.mp4\n[/FORMAT]\n[STREAM]\nindex=0\n[/STREAM]\n";
//! let result = parse_probe_output(text.as_bytes()).unwrap();
//! assert_eq!(result.format_value("filename"), Some("a.mp4"));
//! assert_eq!(result.stream_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod media;
pub mod parser;

// Re-exports for public API
pub use config::ProbeConfig;
pub use error::{CoreError, CoreResult};
pub use external::{CommandFfprobeExecutor, FfprobeExecutor, check_dependency, probe};
pub use media::{ProbeResult, Section};
pub use parser::{LineReader, SectionError, SectionKind, parse_probe_output};
