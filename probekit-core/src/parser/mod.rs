//! Parsing of ffprobe's textual output.
//!
//! - `line_reader`: rebuilds complete lines from buffered chunks.
//! - `sections`: turns those lines into a [`ProbeResult`](crate::media::ProbeResult).

pub mod line_reader;
pub mod sections;

pub use line_reader::LineReader;
pub use sections::{
    STREAM_INDEX_OPTION, SectionError, SectionKind, parse_probe_output, read_section,
};
