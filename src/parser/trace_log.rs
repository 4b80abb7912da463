//! Lazy, single-pass stream over the lines of a trace log.
//!
//! Each item is one trimmed, classified line. The stream stops at the
//! first error; callers are expected to abort on it.

use super::token::Token;
use crate::utils::error::AggregateError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// A classified line together with its source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    /// 1-based line number in the log
    pub number: usize,

    /// Trimmed text of the line, kept verbatim for path keys
    pub text: String,

    /// Classified token
    pub token: Token,
}

/// Iterator over the classified lines of a trace log
pub struct TraceLines<R> {
    lines: Lines<R>,
    number: usize,
}

impl<R: BufRead> TraceLines<R> {
    /// Wrap any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
        }
    }
}

impl<R: BufRead> Iterator for TraceLines<R> {
    type Item = Result<TraceLine, AggregateError>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = match self.lines.next()? {
            Ok(raw) => raw,
            Err(e) => return Some(Err(AggregateError::Read(e))),
        };
        self.number += 1;

        let text = raw.trim().to_string();
        Some(
            Token::classify(self.number, &text)
                .map(|token| TraceLine {
                    number: self.number,
                    text,
                    token,
                })
                .map_err(AggregateError::from),
        )
    }
}

/// Open a trace log file for streaming
///
/// **Public** - main entry point for file input
///
/// # Errors
/// * `AggregateError::InputUnavailable` - file missing or unreadable
pub fn open_trace_log(path: impl AsRef<Path>) -> Result<TraceLines<BufReader<File>>, AggregateError> {
    let path = path.as_ref();

    debug!("Opening trace log: {}", path.display());

    let file = File::open(path).map_err(|source| AggregateError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(TraceLines::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_lines_are_trimmed_and_numbered() {
        let input = Cursor::new("start\n  4 \r\nend\n");
        let lines: Vec<TraceLine> = TraceLines::new(input).map(|l| l.unwrap()).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].number, 2);
        assert_eq!(lines[1].text, "4");
        assert_eq!(lines[1].token, Token::Point(4));
    }

    #[test]
    fn test_stream_is_lazy_until_bad_line() {
        let input = Cursor::new("start\n1\nbogus\n2\n");
        let mut lines = TraceLines::new(input);

        assert!(lines.next().unwrap().is_ok());
        assert!(lines.next().unwrap().is_ok());
        assert!(matches!(
            lines.next(),
            Some(Err(AggregateError::Parse(_)))
        ));
    }

    #[test]
    fn test_missing_file_is_input_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_trace_log(dir.path().join("coverage.txt"));
        assert!(matches!(result, Err(AggregateError::InputUnavailable { .. })));
    }
}
