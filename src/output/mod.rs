//! Output writers for aggregation results.
//!
//! This module handles writing data to disk in various formats:
//! - The plain text path report (`paths.txt`)
//! - JSON coverage summaries
//! - Markdown diff-style hit lists

pub mod json;
pub mod markdown;
pub mod report;

// Re-export main functions
pub use json::{read_summary, to_summary, write_summary, CoverageSummary};
pub use markdown::{render_hit_list, write_hit_list};
pub use report::{render_report, write_report};

use crate::utils::error::OutputError;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create any missing parent directories of `path`
fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// Write text content to `path`, replacing any existing file
///
/// **Private** - shared by the text and markdown writers
fn write_text(content: &str, path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;
    ensure_parent_dir(path)?;

    let file = File::create(path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    Ok(())
}
