//! Configuration and constants for the CLI.

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Trace log read when no `--input` is given
pub const DEFAULT_INPUT_FILE: &str = "coverage.txt";

/// Report written when no `--output` is given
pub const DEFAULT_OUTPUT_FILE: &str = "paths.txt";

// Sentinel tokens written by the instrumented program around each path
pub const START_MARKER: &str = "start";
pub const END_MARKER: &str = "end";

// Report grid layout: every cell is left-justified to this width
pub const CELL_WIDTH: usize = 2;
pub const HIT_MARK: char = 'O';
pub const MISS_MARK: char = 'X';
