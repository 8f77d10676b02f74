//! Decoding of ffprobe's default (INI-like) writer output.
//!
//! The output is a flat sequence of blocks:
//!
//! ```text
//! [FORMAT]
//! filename=a.mp4
//! [/FORMAT]
//! [STREAM]
//! index=0
//! codec_type=video
//! [/STREAM]
//! ```
//!
//! Every line at the top level must open a block. Inside a block every line is
//! `option=value` until the matching close marker. Stream blocks must declare
//! `index` values 0, 1, 2, ... in the order they appear.

use crate::error::CoreResult;
use crate::media::{ProbeResult, Section};
use crate::parser::line_reader::LineReader;

use std::collections::btree_map::Entry;
use std::fmt;
use std::io::BufRead;
use thiserror::Error;

/// Option every stream block must carry.
pub const STREAM_INDEX_OPTION: &str = "index";

/// Grammar violations found while decoding probe output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section {marker:?} at line {line}")]
    UnknownSection { line: usize, marker: String },

    #[error("duplicate option {option:?} in {section} section at line {line}")]
    DuplicateOption {
        line: usize,
        section: SectionKind,
        option: String,
    },

    #[error("line {line} in {section} section has no '=' separator: {text:?}")]
    MissingSeparator {
        line: usize,
        section: SectionKind,
        text: String,
    },

    #[error("{0} section not closed before end of output")]
    UnterminatedSection(SectionKind),

    #[error("stream at position {position} has no index option")]
    MissingStreamIndex { position: usize },

    #[error("stream at position {position} has invalid index {value:?}")]
    InvalidStreamIndex { position: usize, value: String },

    #[error("streams unordered: expected index {expected}, found {found}")]
    StreamsUnordered { expected: usize, found: usize },

    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}

/// The two kinds of block ffprobe prints for `-show_format -show_streams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Format,
    Stream,
}

impl SectionKind {
    /// Recognizes a top-level open marker.
    #[must_use]
    pub fn from_open_marker(line: &str) -> Option<Self> {
        match line {
            "[FORMAT]" => Some(SectionKind::Format),
            "[STREAM]" => Some(SectionKind::Stream),
            _ => None,
        }
    }

    #[must_use]
    pub const fn open_marker(self) -> &'static str {
        match self {
            SectionKind::Format => "[FORMAT]",
            SectionKind::Stream => "[STREAM]",
        }
    }

    #[must_use]
    pub const fn close_marker(self) -> &'static str {
        match self {
            SectionKind::Format => "[/FORMAT]",
            SectionKind::Stream => "[/STREAM]",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SectionKind::Format => "FORMAT",
            SectionKind::Stream => "STREAM",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a complete ffprobe output stream.
///
/// Reads until end of stream. On any I/O or grammar error the partially
/// built result is dropped and only the error is returned.
pub fn parse_probe_output<R: BufRead>(reader: R) -> CoreResult<ProbeResult> {
    let mut lines = LineReader::new(reader);
    let mut result = ProbeResult::default();

    while let Some(line) = next_line(&mut lines)? {
        match SectionKind::from_open_marker(&line) {
            Some(SectionKind::Format) => {
                // A repeated FORMAT block replaces the earlier one.
                result.format = read_section(&mut lines, SectionKind::Format)?;
            }
            Some(SectionKind::Stream) => {
                let section = read_section(&mut lines, SectionKind::Stream)?;
                push_stream(&mut result.streams, section)?;
            }
            None => {
                return Err(SectionError::UnknownSection {
                    line: lines.line_number(),
                    marker: line,
                }
                .into());
            }
        }
    }

    log::debug!(
        "Parsed probe output: {} format option(s), {} stream(s) in {} line(s)",
        result.format.len(),
        result.streams.len(),
        lines.line_number()
    );

    Ok(result)
}

/// Reads `option=value` lines until the close marker of `kind`.
///
/// The open marker must already have been consumed.
pub fn read_section<R: BufRead>(
    lines: &mut LineReader<R>,
    kind: SectionKind,
) -> CoreResult<Section> {
    let end = kind.close_marker();
    let mut section = Section::new();

    loop {
        let Some(line) = next_line(lines)? else {
            return Err(SectionError::UnterminatedSection(kind).into());
        };
        if line == end {
            return Ok(section);
        }

        let Some((option, value)) = line.split_once('=') else {
            return Err(SectionError::MissingSeparator {
                line: lines.line_number(),
                section: kind,
                text: line,
            }
            .into());
        };

        match section.entry(option.to_string()) {
            Entry::Occupied(entry) => {
                return Err(SectionError::DuplicateOption {
                    line: lines.line_number(),
                    section: kind,
                    option: entry.key().clone(),
                }
                .into());
            }
            Entry::Vacant(entry) => {
                entry.insert(value.to_string());
            }
        }
    }
}

/// Reads one line, reporting undecodable bytes as a grammar error.
fn next_line<R: BufRead>(lines: &mut LineReader<R>) -> CoreResult<Option<String>> {
    let Some(bytes) = lines.read_line_bytes()? else {
        return Ok(None);
    };
    let line = String::from_utf8(bytes).map_err(|_| SectionError::InvalidUtf8 {
        line: lines.line_number(),
    })?;
    Ok(Some(line))
}

/// Appends a stream section after checking its declared index.
fn push_stream(streams: &mut Vec<Section>, section: Section) -> Result<(), SectionError> {
    let position = streams.len();
    let value = section
        .get(STREAM_INDEX_OPTION)
        .ok_or(SectionError::MissingStreamIndex { position })?;
    let found = value
        .trim()
        .parse::<usize>()
        .map_err(|_| SectionError::InvalidStreamIndex {
            position,
            value: value.clone(),
        })?;

    if found != position {
        return Err(SectionError::StreamsUnordered {
            expected: position,
            found,
        });
    }

    streams.push(section);
    Ok(())
}
