//! Aggregate command implementation.
//!
//! The aggregate command:
//! 1. Resolves the measurement point count
//! 2. Streams and aggregates the trace log
//! 3. Computes coverage statistics
//! 4. Writes the path report and any optional outputs

use crate::aggregator::{aggregate_file, calculate_coverage_stats, CoverageStats};
use crate::output::{to_summary, write_hit_list, write_report, write_summary};
use crate::parser::read_point_count;
use crate::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Trace log to read
    pub input: PathBuf,

    /// Path report to write
    pub output: PathBuf,

    /// Number of measurement points (None = read from stdin)
    pub point_count: Option<usize>,

    /// Output path for JSON summary (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for markdown hit list (optional)
    pub output_markdown: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            point_count: None,
            output_json: None,
            output_markdown: None,
            print_summary: false,
        }
    }
}

/// Validate aggregate arguments before touching any file
///
/// **Public** - called from main.rs ahead of execution
pub fn validate_args(args: &AggregateArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        bail!("Input path is empty");
    }

    let input = resolve_path(&args.input);
    let outputs = std::iter::once(&args.output)
        .chain(args.output_json.iter())
        .chain(args.output_markdown.iter());

    for output in outputs {
        if output.as_os_str().is_empty() {
            bail!("Output path is empty");
        }
        if resolve_path(output) == input {
            bail!(
                "Output path {} would overwrite the input log",
                output.display()
            );
        }
    }

    Ok(())
}

/// Absolute form of `path` for comparison, resolving `.`/`..` and links
///
/// **Private** - the file itself may not exist yet, so its parent is
/// resolved instead; falls back to the path as written.
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = std::fs::canonicalize(path) {
        return resolved;
    }

    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            std::fs::canonicalize(parent)
                .map(|dir| dir.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Coverage statistics of the run
///
/// # Errors
/// * Invalid point count on stdin
/// * Missing or malformed trace log
/// * File write errors
pub fn execute_aggregate(args: AggregateArgs) -> Result<CoverageStats> {
    let start_time = Instant::now();

    // Step 1: Resolve point count
    let point_count = match args.point_count {
        Some(count) => count,
        None => read_point_count(std::io::stdin().lock())
            .context("Failed to read measurement point count from stdin")?,
    };

    info!("Aggregating {} with {} measurement points", args.input.display(), point_count);

    // Step 2: Aggregate the whole log before writing anything
    let context = aggregate_file(point_count, &args.input)
        .with_context(|| format!("Failed to aggregate trace log {}", args.input.display()))?;

    debug!("Read {} log lines", context.lines_read());

    // Step 3: Statistics
    let stats = calculate_coverage_stats(&context);
    info!("Coverage: {}", stats.summary());

    // Step 4: Outputs
    write_report(&context, &args.output).context("Failed to write path report")?;

    if let Some(json_path) = &args.output_json {
        write_summary(&to_summary(&context), json_path).context("Failed to write JSON summary")?;
    }

    if let Some(markdown_path) = &args.output_markdown {
        write_hit_list(&context.points, markdown_path)
            .context("Failed to write markdown hit list")?;
    }

    if args.print_summary {
        println!("{}", stats.summary());
        if stats.is_complete() {
            println!("All measurement points hit");
        } else {
            let ids: Vec<String> = context
                .points
                .missed_ids()
                .iter()
                .map(|id| id.to_string())
                .collect();
            println!("Missed points: {}", ids.join(", "));
        }
    }

    info!("Done in {:.2?}", start_time.elapsed());

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_use_standard_files() {
        let args = AggregateArgs::default();
        assert_eq!(args.input, PathBuf::from("coverage.txt"));
        assert_eq!(args.output, PathBuf::from("paths.txt"));
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_rejects_output_over_input() {
        let args = AggregateArgs {
            output_json: Some(PathBuf::from("coverage.txt")),
            ..AggregateArgs::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_rejects_equivalent_spelling_of_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("coverage.txt");
        std::fs::write(&input, "start\nend\n").unwrap();

        let args = AggregateArgs {
            input,
            output: dir.path().join(".").join("coverage.txt"),
            ..AggregateArgs::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_output() {
        let args = AggregateArgs {
            output: PathBuf::new(),
            ..AggregateArgs::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_writes_nothing_on_bad_log() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("coverage.txt");
        let output = dir.path().join("paths.txt");
        std::fs::write(&input, "start\n1\n9\nend\n").unwrap();

        let args = AggregateArgs {
            input,
            output: output.clone(),
            point_count: Some(2),
            ..AggregateArgs::default()
        };

        assert!(execute_aggregate(args).is_err());
        assert!(!output.exists());
    }
}
