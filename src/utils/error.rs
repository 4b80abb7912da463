//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while classifying input text
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed token on line {line}: {token:?} is not 'start', 'end' or an integer")]
    MalformedToken { line: usize, token: String },

    #[error("Invalid measurement point count: {0:?}")]
    InvalidPointCount(String),
}

/// Errors that can occur while aggregating a trace log
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Cannot read trace log {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error while reading trace log: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Point {point} on line {line} is outside the measurement range 1..={count}")]
    OutOfRangeIndex { line: usize, point: i64, count: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
