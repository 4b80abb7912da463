use anyhow::Result;
use std::path::PathBuf;
use crate::output::read_summary;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a JSON summary file
pub fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    println!("Validating summary: {}", file_path.display());

    let summary = read_summary(&file_path)?;

    println!("✓ Valid summary JSON");
    println!("  Version: {}", summary.version);
    println!("  Points: {}", summary.point_count);
    println!("  Hit: {} ({:.1}%)", summary.hit_points.len(), summary.coverage_percent);
    println!("  Paths: {} ({} distinct)", summary.total_paths, summary.paths.len());
    println!("  Generated: {}", summary.generated_at);

    if summary.version != SCHEMA_VERSION {
        log::warn!(
            "Summary schema v{} differs from current v{}",
            summary.version,
            SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Coverage Paths v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregates manual coverage traces into path counts and point hit maps.");
}
