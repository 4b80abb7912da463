//! Aggregation of trace lines into path counts and point coverage.
//!
//! This module transforms the classified trace stream into:
//! - A path tally (distinct paths in first-seen order, with counts)
//! - Measurement point hit flags
//! - Coverage statistics

pub mod points;
pub mod run;
pub mod stats;
pub mod tally;

// Re-export main types and functions
pub use points::MeasurementPoints;
pub use run::{aggregate, aggregate_file, RunContext};
pub use stats::{calculate_coverage_stats, CoverageStats};
pub use tally::{PathCount, PathTally};
