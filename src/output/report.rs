//! Plain text path report.
//!
//! Format:
//! ```text
//! 1 2: 2
//! 3: 1
//!
//! 1  2  3
//! O  O  X
//! ```
//! One `<path>: <count>` line per distinct path in first-seen order, a
//! blank line, then the point index row and the hit/miss row. Every cell
//! is left-justified to a fixed width and cells are joined by one space,
//! so rows keep a trailing space after single-character cells.

use super::write_text;
use crate::aggregator::RunContext;
use crate::utils::config::{CELL_WIDTH, HIT_MARK, MISS_MARK};
use crate::utils::error::OutputError;
use log::info;
use std::path::Path;

/// Render the report for a finished run
pub fn render_report(context: &RunContext) -> String {
    let mut out = String::new();

    for entry in context.tally.entries() {
        out.push_str(&format!("{}: {}\n", entry.path, entry.count));
    }
    out.push('\n');

    let indices: Vec<String> = context.points.iter().map(|(id, _)| cell(id)).collect();
    out.push_str(&indices.join(" "));
    out.push('\n');

    let marks: Vec<String> = context
        .points
        .iter()
        .map(|(_, hit)| cell(if hit { HIT_MARK } else { MISS_MARK }))
        .collect();
    out.push_str(&marks.join(" "));
    out.push('\n');

    out
}

fn cell(value: impl std::fmt::Display) -> String {
    format!("{:<width$}", value, width = CELL_WIDTH)
}

/// Write the report to `output_path`, overwriting it
///
/// **Public** - main entry point for report output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty or a directory
pub fn write_report(context: &RunContext, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing path report to: {}", output_path.display());

    let content = render_report(context);
    write_text(&content, output_path)?;

    info!(
        "Report written successfully ({} paths, {} bytes)",
        context.tally.len(),
        content.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::parser::TraceLines;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn context(count: usize, log: &str) -> RunContext {
        aggregate(RunContext::new(count), TraceLines::new(Cursor::new(log.to_string()))).unwrap()
    }

    #[test]
    fn test_render_mixed_hits() {
        let ctx = context(3, "start\n1\nend\n");
        assert_eq!(render_report(&ctx), "1: 1\n\n1  2  3 \nO  X  X \n");
    }

    #[test]
    fn test_two_digit_indices_fill_the_cell() {
        let ctx = context(10, "start\n10\nend\n");
        let report = render_report(&ctx);
        let rows: Vec<&str> = report.lines().collect();

        assert_eq!(rows[2], "1  2  3  4  5  6  7  8  9  10");
        assert_eq!(rows[3], "X  X  X  X  X  X  X  X  X  O ");
    }

    #[test]
    fn test_empty_run() {
        assert_eq!(render_report(&RunContext::new(0)), "\n\n\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paths.txt");
        std::fs::write(&path, "stale content that is longer than the report\n").unwrap();

        write_report(&context(1, "start\n1\nend\n"), &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1: 1\n\n1 \nO \n");
    }
}
