//! Reading the number of measurement points.

use crate::utils::error::{AggregateError, ParseError};
use std::io::BufRead;

/// Parse a point count, ignoring surrounding whitespace
///
/// # Errors
/// * `ParseError::InvalidPointCount` - not a non-negative integer
pub fn parse_point_count(text: &str) -> Result<usize, ParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidPointCount(trimmed.to_string()))
}

/// Read the point count from the first line of `reader` (usually stdin)
pub fn read_point_count(mut reader: impl BufRead) -> Result<usize, AggregateError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(parse_point_count(&line)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_first_line_only() {
        let count = read_point_count(Cursor::new(" 12 \n99\n")).unwrap();
        assert_eq!(count, 12);
    }

    #[test]
    fn test_zero_is_allowed() {
        assert_eq!(parse_point_count("0").unwrap(), 0);
    }

    #[test]
    fn test_rejects_negative_and_garbage() {
        assert!(parse_point_count("-1").is_err());
        assert!(parse_point_count("three").is_err());
        assert!(read_point_count(Cursor::new("")).is_err());
    }
}
