//! Summary statistics over a finished run.

use super::run::RunContext;

/// Coverage statistics
///
/// **Public** - returned from calculate_coverage_stats
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageStats {
    /// Number of measurement points (N)
    pub point_count: usize,

    /// Points hit at least once
    pub hit_count: usize,

    /// Distinct paths
    pub unique_paths: usize,

    /// Completed records (sum of all path counts)
    pub total_paths: u64,

    /// Share of points hit, 0.0 when there are no points
    pub coverage_percent: f64,
}

/// Calculate coverage statistics for a run
pub fn calculate_coverage_stats(context: &RunContext) -> CoverageStats {
    let point_count = context.points.len();
    let hit_count = context.points.hit_count();

    CoverageStats {
        point_count,
        hit_count,
        unique_paths: context.tally.len(),
        total_paths: context.tally.total(),
        coverage_percent: if point_count > 0 {
            (hit_count as f64 / point_count as f64) * 100.0
        } else {
            0.0
        },
    }
}

impl CoverageStats {
    /// Whether every measurement point was reached
    pub fn is_complete(&self) -> bool {
        self.hit_count == self.point_count
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and `--summary`
    pub fn summary(&self) -> String {
        format!(
            "Points hit: {}/{} ({:.1}%) | Paths: {} ({} distinct)",
            self.hit_count,
            self.point_count,
            self.coverage_percent,
            self.total_paths,
            self.unique_paths
        )
    }
}
