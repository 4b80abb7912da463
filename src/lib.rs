//! Coverage Paths
//!
//! Aggregates manual coverage traces into path frequencies and a
//! measurement point hit map.
//!
//! An instrumented program appends to `coverage.txt` a `start` line, one
//! line per measurement point it passes through, and an `end` line. This
//! crate counts how often each distinct sequence of points occurred and
//! which points were reached at all, and writes the result to `paths.txt`.
//!
//! ## Getting Started
//!
//! ```bash
//! echo 3 | coverage-paths
//! coverage-paths aggregate --points 3 --summary --json coverage.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
