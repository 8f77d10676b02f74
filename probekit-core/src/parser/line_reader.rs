//! Logical line reassembly over a buffered byte stream.
//!
//! `BufRead::fill_buf` hands out whatever the internal buffer currently holds.
//! A line longer than that buffer therefore arrives as several chunks, each
//! but the last one "continued". The reader glues those fragments back
//! together before anyone looks at the text, so a parser never sees a line
//! that was cut by the buffer rather than by the data.

use std::io::{self, BufRead};

/// Lazy, non-restartable sequence of complete lines read from `R`.
pub struct LineReader<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// 1-based number of the last line returned, 0 before the first read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next logical line as text, without its terminator.
    ///
    /// Bytes are decoded once the whole line is assembled, so a multi-byte
    /// character split across two chunks is decoded intact. A line that is
    /// not valid UTF-8 fails with [`io::ErrorKind::InvalidData`]; no byte is
    /// ever replaced.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let Some(bytes) = self.read_line_bytes()? else {
            return Ok(None);
        };
        String::from_utf8(bytes).map(Some).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {} is not valid UTF-8: {}", self.line_number, e.utf8_error()),
            )
        })
    }

    /// Reads the next logical line as raw bytes, without its terminator.
    ///
    /// Returns `Ok(None)` at end of stream when no partial line is pending.
    /// A trailing line without a newline is still returned.
    pub fn read_line_bytes(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut pending: Vec<u8> = Vec::new();
        let mut terminated = false;

        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if chunk.is_empty() {
                if pending.is_empty() {
                    return Ok(None);
                }
                break;
            }

            let (consumed, continued) = match chunk.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    pending.extend_from_slice(&chunk[..pos]);
                    (pos + 1, false)
                }
                None => {
                    pending.extend_from_slice(chunk);
                    (chunk.len(), true)
                }
            };
            self.reader.consume(consumed);

            if !continued {
                terminated = true;
                break;
            }
        }

        if terminated && pending.last() == Some(&b'\r') {
            pending.pop();
        }

        self.line_number += 1;
        Ok(Some(pending))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    /// Hands out at most `step` bytes per read call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    /// Fails after delivering its data once.
    struct Broken<'a> {
        data: &'a [u8],
    }

    impl Read for Broken<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    fn collect<R: BufRead>(reader: R) -> Vec<String> {
        LineReader::new(reader)
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_reads_plain_lines() {
        let lines = collect(Cursor::new("[FORMAT]\nfilename=a.mp4\n[/FORMAT]\n"));
        assert_eq!(lines, vec!["[FORMAT]", "filename=a.mp4", "[/FORMAT]"]);
    }

    #[test]
    fn test_reassembles_lines_split_by_small_buffer() {
        let text = "TAG:title=a rather long title that does not fit\nshort=1\n";
        let unsplit = collect(Cursor::new(text));

        for capacity in [1, 2, 3, 7, 16] {
            let reader = BufReader::with_capacity(capacity, Trickle {
                data: text.as_bytes(),
                step: 5,
            });
            assert_eq!(collect(reader), unsplit, "capacity {capacity}");
        }
    }

    #[test]
    fn test_multibyte_character_split_across_chunks() {
        let text = "TAG:title=caf\u{e9} \u{1f3ac}\n";
        let reader = BufReader::with_capacity(2, Trickle {
            data: text.as_bytes(),
            step: 1,
        });
        assert_eq!(collect(reader), vec!["TAG:title=caf\u{e9} \u{1f3ac}"]);
    }

    #[test]
    fn test_strips_crlf_only() {
        let lines = collect(Cursor::new("a=1\r\n b = 2 \n\n"));
        assert_eq!(lines, vec!["a=1", " b = 2 ", ""]);
    }

    #[test]
    fn test_final_line_without_newline() {
        let lines = collect(Cursor::new("[STREAM]\n[/STREAM]"));
        assert_eq!(lines, vec!["[STREAM]", "[/STREAM]"]);
    }

    #[test]
    fn test_empty_input_is_end_of_stream() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert!(reader.read_line().unwrap().is_none());
        assert!(reader.read_line().unwrap().is_none());
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn test_counts_lines() {
        let mut reader = LineReader::new(Cursor::new("a\nb\nc"));
        while reader.read_line().unwrap().is_some() {}
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn test_io_error_is_not_end_of_stream() {
        let reader = BufReader::with_capacity(4, Broken {
            data: b"[FORMAT]\nfile",
        });
        let mut lines = LineReader::new(reader);
        assert_eq!(lines.read_line().unwrap().as_deref(), Some("[FORMAT]"));
        let err = lines.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_invalid_utf8_is_rejected_not_replaced() {
        let mut reader = LineReader::new(Cursor::new(&b"[FORMAT]\nfilename=caf\xe9.mkv\n"[..]));
        assert_eq!(reader.read_line().unwrap().as_deref(), Some("[FORMAT]"));
        let err = reader.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("line 2 "), "{err}");
    }

    #[test]
    fn test_raw_bytes_are_kept_verbatim() {
        let mut reader = LineReader::new(Cursor::new(&b"TAG:a\xe9=1\r\n"[..]));
        assert_eq!(reader.read_line_bytes().unwrap(), Some(b"TAG:a\xe9=1".to_vec()));
        assert_eq!(reader.read_line_bytes().unwrap(), None);
        assert_eq!(reader.line_number(), 1);
    }
}
