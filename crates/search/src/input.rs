//! Candidate reader.
//!
//! Splits a byte stream into candidates on LF, strips one trailing CR, and
//! never buffers more than `max_line_length + 1` bytes of a single line.
//! Lines over the limit are truncated or skipped according to
//! [`OverlongPolicy`].

use crate::error::{Result, SearchError};
use std::io::{self, BufRead};

pub use fuzzrank_core::config::{OverlongPolicy, DEFAULT_MAX_LINE_LENGTH};

/// Line buffering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Maximum bytes of one line, terminator excluded
    pub max_line_length: usize,
    /// Applied to lines longer than `max_line_length`
    pub overlong: OverlongPolicy,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            overlong: OverlongPolicy::Truncate,
        }
    }
}

impl ReaderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.max_line_length == 0 {
            return Err(SearchError::InvalidOptions(
                "max line length must be at least 1 byte".to_string(),
            ));
        }
        Ok(())
    }
}

/// One input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Zero-based position among the candidates read (skipped lines excluded)
    pub index: usize,
    /// Line text without its terminator
    pub text: String,
    /// The line was cut to the buffer limit
    pub truncated: bool,
}

/// Counters for one pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Lines seen, including skipped ones
    pub lines: usize,
    pub truncated: usize,
    pub skipped: usize,
}

/// Iterator over the candidates of a buffered reader.
pub struct CandidateReader<R> {
    inner: R,
    options: ReaderOptions,
    buf: Vec<u8>,
    next_index: usize,
    stats: ReadStats,
}

impl<R: BufRead> CandidateReader<R> {
    pub fn new(inner: R, options: ReaderOptions) -> Self {
        Self {
            inner,
            options,
            buf: Vec::new(),
            next_index: 0,
            stats: ReadStats::default(),
        }
    }

    /// Counters so far; final once the iterator returns `None`.
    pub fn stats(&self) -> ReadStats {
        self.stats
    }

    /// Fill `buf` with the next line. Returns whether the line was over the limit,
    /// or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<bool>> {
        self.buf.clear();
        // one spare byte so a CR right at the limit can still be recognised
        let capacity = self.options.max_line_length.saturating_add(1);
        let mut overflowed = false;
        let mut saw_input = false;

        loop {
            let (used, done) = {
                let available = match self.inner.fill_buf() {
                    Ok(bytes) => bytes,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    break;
                }
                saw_input = true;

                let (part, used, done) = match available.iter().position(|&b| b == b'\n') {
                    Some(i) => (&available[..i], i + 1, true),
                    None => (available, available.len(), false),
                };

                let room = capacity - self.buf.len();
                if part.len() > room {
                    overflowed = true;
                    self.buf.extend_from_slice(&part[..room]);
                } else {
                    self.buf.extend_from_slice(part);
                }
                (used, done)
            };
            self.inner.consume(used);
            if done {
                break;
            }
        }

        if !saw_input {
            return Ok(None);
        }
        if !overflowed && self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        Ok(Some(overflowed || self.buf.len() > self.options.max_line_length))
    }
}

impl<R: BufRead> Iterator for CandidateReader<R> {
    type Item = io::Result<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let overlong = match self.read_line() {
                Ok(Some(overlong)) => overlong,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            };
            self.stats.lines += 1;

            if overlong {
                match self.options.overlong {
                    OverlongPolicy::Skip => {
                        self.stats.skipped += 1;
                        tracing::debug!(
                            line = self.stats.lines,
                            limit = self.options.max_line_length,
                            "Skipping overlong line"
                        );
                        continue;
                    }
                    OverlongPolicy::Truncate => {
                        self.stats.truncated += 1;
                        tracing::debug!(
                            line = self.stats.lines,
                            limit = self.options.max_line_length,
                            "Truncating overlong line"
                        );
                        self.buf.truncate(self.options.max_line_length);
                    }
                }
            }

            let index = self.next_index;
            self.next_index += 1;
            return Some(Ok(Candidate {
                index,
                text: decode(&self.buf, overlong),
                truncated: overlong,
            }));
        }
    }
}

/// Decode a line. A character split by truncation is dropped rather than
/// replaced; other invalid bytes become U+FFFD.
fn decode(bytes: &[u8], truncated: bool) -> String {
    let bytes = if truncated {
        complete_prefix(bytes)
    } else {
        bytes
    };
    String::from_utf8_lossy(bytes).into_owned()
}

/// Cut off a trailing multi-byte sequence that runs past the end of `bytes`.
fn complete_prefix(bytes: &[u8]) -> &[u8] {
    for back in 1..=bytes.len().min(4) {
        let start = bytes.len() - back;
        let lead = bytes[start];
        if lead & 0xC0 == 0x80 {
            // continuation byte, keep looking for the lead
            continue;
        }
        let width = match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        return if width > back { &bytes[..start] } else { bytes };
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn read_all(input: &[u8], options: ReaderOptions) -> (Vec<Candidate>, ReadStats) {
        let mut reader = CandidateReader::new(Cursor::new(input.to_vec()), options);
        let candidates = reader.by_ref().collect::<io::Result<Vec<_>>>().unwrap();
        (candidates, reader.stats())
    }

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.text.as_str()).collect()
    }

    fn limit(max_line_length: usize, overlong: OverlongPolicy) -> ReaderOptions {
        ReaderOptions {
            max_line_length,
            overlong,
        }
    }

    #[test]
    fn test_reads_lines_in_order() {
        let (candidates, stats) = read_all(b"one\ntwo\nthree\n", ReaderOptions::default());
        assert_eq!(texts(&candidates), ["one", "two", "three"]);
        assert_eq!(candidates.iter().map(|c| c.index).collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn test_last_line_without_newline() {
        let (candidates, _) = read_all(b"one\ntwo", ReaderOptions::default());
        assert_eq!(texts(&candidates), ["one", "two"]);
    }

    #[test]
    fn test_empty_input() {
        let (candidates, stats) = read_all(b"", ReaderOptions::default());
        assert!(candidates.is_empty());
        assert_eq!(stats, ReadStats::default());
    }

    #[test]
    fn test_blank_lines_are_candidates() {
        let (candidates, _) = read_all(b"a\n\nb\n", ReaderOptions::default());
        assert_eq!(texts(&candidates), ["a", "", "b"]);
    }

    #[test]
    fn test_strips_carriage_return() {
        let (candidates, _) = read_all(b"foo\r\nbar\r\nbaz\r", ReaderOptions::default());
        assert_eq!(texts(&candidates), ["foo", "bar", "baz"]);
    }

    #[test]
    fn test_only_one_carriage_return_is_stripped() {
        let (candidates, _) = read_all(b"foo\r\r\n", ReaderOptions::default());
        assert_eq!(texts(&candidates), ["foo\r"]);
    }

    #[test]
    fn test_truncates_overlong_line() {
        let (candidates, stats) =
            read_all(b"short\nabcdefghij\nok\n", limit(5, OverlongPolicy::Truncate));
        assert_eq!(texts(&candidates), ["short", "abcde", "ok"]);
        assert!(!candidates[0].truncated);
        assert!(candidates[1].truncated);
        assert_eq!(stats.truncated, 1);
        assert_eq!(stats.skipped, 0);
    }

    #[test]
    fn test_skips_overlong_line() {
        let (candidates, stats) =
            read_all(b"short\nabcdefghij\nok\n", limit(5, OverlongPolicy::Skip));
        assert_eq!(texts(&candidates), ["short", "ok"]);
        assert_eq!(candidates[1].index, 1);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_line_at_limit_is_kept_whole() {
        let (candidates, stats) = read_all(b"abcde\nabcde\r\n", limit(5, OverlongPolicy::Skip));
        assert_eq!(texts(&candidates), ["abcde", "abcde"]);
        assert_eq!(stats.skipped, 0);
    }

    #[test]
    fn test_one_byte_over_limit_with_crlf() {
        let (candidates, _) = read_all(b"abcdef\r\n", limit(5, OverlongPolicy::Truncate));
        assert_eq!(texts(&candidates), ["abcde"]);
        assert!(candidates[0].truncated);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 'é' is two bytes; a four byte limit cuts through it
        let (candidates, _) = read_all("abcé\n".as_bytes(), limit(4, OverlongPolicy::Truncate));
        assert_eq!(texts(&candidates), ["abc"]);
    }

    #[test]
    fn test_truncation_after_invalid_byte_drops_split_char() {
        let (candidates, _) =
            read_all(b"a\xffc\xc3\xa9z\n", limit(4, OverlongPolicy::Truncate));
        assert_eq!(texts(&candidates), ["a\u{fffd}c"]);
    }

    #[test]
    fn test_truncation_keeps_complete_trailing_char() {
        // "aé" fits exactly in three bytes
        let (candidates, _) = read_all("aéz\n".as_bytes(), limit(3, OverlongPolicy::Truncate));
        assert_eq!(texts(&candidates), ["aé"]);
    }

    #[test]
    fn test_complete_prefix() {
        assert_eq!(complete_prefix(b"ab"), b"ab");
        assert_eq!(complete_prefix(b"a\xe2\x82"), b"a");
        assert_eq!(complete_prefix(b"a\xe2\x82\xac"), b"a\xe2\x82\xac");
        assert_eq!(complete_prefix(b"\x80\x80"), b"\x80\x80");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let (candidates, _) = read_all(b"ab\xffcd\n", ReaderOptions::default());
        assert_eq!(texts(&candidates), ["ab\u{fffd}cd"]);
    }

    #[test]
    fn test_lines_spanning_small_buffers() {
        let input = b"alpha\nbeta-gamma-delta\nepsilon\n".to_vec();
        let reader = BufReader::with_capacity(3, Cursor::new(input));
        let candidates = CandidateReader::new(reader, limit(8, OverlongPolicy::Truncate))
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(texts(&candidates), ["alpha", "beta-gam", "epsilon"]);
    }

    #[test]
    fn test_options_validate() {
        assert!(ReaderOptions::default().validate().is_ok());
        assert!(limit(0, OverlongPolicy::Skip).validate().is_err());
    }
}
