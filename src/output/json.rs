//! JSON coverage summary writer.
//!
//! Writes a versioned, machine-readable summary of a run next to the
//! plain text report.

use crate::aggregator::{calculate_coverage_stats, PathCount, RunContext};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Top-level summary structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Number of measurement points (N)
    pub point_count: usize,

    /// Ids of points hit at least once
    pub hit_points: Vec<usize>,

    /// Ids of points never hit
    pub missed_points: Vec<usize>,

    /// Percentage of points hit
    pub coverage_percent: f64,

    /// Completed records
    pub total_paths: u64,

    /// Distinct paths in first-seen order
    pub paths: Vec<PathCount>,

    /// Timestamp when the summary was generated
    pub generated_at: String,
}

/// Build a summary from a finished run
pub fn to_summary(context: &RunContext) -> CoverageSummary {
    let stats = calculate_coverage_stats(context);

    CoverageSummary {
        version: SCHEMA_VERSION.to_string(),
        point_count: stats.point_count,
        hit_points: context.points.hit_ids(),
        missed_points: context.points.missed_ids(),
        coverage_percent: stats.coverage_percent,
        total_paths: stats.total_paths,
        paths: context.tally.entries().to_vec(),
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Write a summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(summary: &CoverageSummary, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON summary to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summary).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a summary from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<CoverageSummary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let summary: CoverageSummary =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Summary loaded: version {}, {} points",
        summary.version, summary.point_count
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::parser::TraceLines;
    use std::io::Cursor;

    fn create_test_context() -> RunContext {
        let log = "start\n2\n1\nend\nstart\n2\nend\n";
        aggregate(RunContext::new(4), TraceLines::new(Cursor::new(log))).unwrap()
    }

    #[test]
    fn test_summary_contents() {
        let summary = to_summary(&create_test_context());

        assert_eq!(summary.version, SCHEMA_VERSION);
        assert_eq!(summary.hit_points, vec![1, 2]);
        assert_eq!(summary.missed_points, vec![3, 4]);
        assert_eq!(summary.total_paths, 2);
        assert_eq!(summary.paths[0].path, "2 1");
        assert_eq!(summary.coverage_percent, 50.0);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/summary.json");

        write_summary(&to_summary(&create_test_context()), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            read_summary(&path),
            Err(OutputError::SerializationFailed(_))
        ));
    }
}
