//! Classification of a single trace log line.

use crate::utils::config::{END_MARKER, START_MARKER};
use crate::utils::error::ParseError;

/// One classified line of the trace log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Opens a new path record
    Start,

    /// Closes the current path record and tallies it
    End,

    /// A measurement point identifier (not yet range-checked)
    Point(i64),
}

impl Token {
    /// Classify an already-trimmed line
    ///
    /// **Public** - used by the trace line stream
    ///
    /// # Errors
    /// * `ParseError::MalformedToken` - line is neither marker nor integer
    pub fn classify(line: usize, text: &str) -> Result<Self, ParseError> {
        match text {
            START_MARKER => Ok(Token::Start),
            END_MARKER => Ok(Token::End),
            other => other
                .parse::<i64>()
                .ok()
                .or_else(|| saturated_integer(other))
                .map(Token::Point)
                .ok_or_else(|| ParseError::MalformedToken {
                    line,
                    token: other.to_string(),
                }),
        }
    }
}

/// Clamp an integer too wide for `i64` so that it still fails the range check
fn saturated_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(if negative { i64::MIN } else { i64::MAX })
}
