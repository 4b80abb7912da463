//! Trace log parsing.
//!
//! This module handles:
//! - Classifying each log line into a marker or point token
//! - Streaming trimmed lines lazily from the trace log
//! - Reading the measurement point count from the operator

pub mod point_count;
pub mod token;
pub mod trace_log;

// Re-export main types
pub use point_count::{parse_point_count, read_point_count};
pub use token::Token;
pub use trace_log::{open_trace_log, TraceLine, TraceLines};
