//! Single-pass aggregation over a trace log.
//!
//! Algorithm:
//! 1. `start` clears the current record
//! 2. a point token marks its flag and extends the current record
//! 3. `end` tallies the current record's key
//!
//! `end` does not clear the record: tokens seen before the next `start`
//! extend it, and a repeated `end` tallies the longer path. A record still
//! open when the log runs out is dropped.

use super::points::MeasurementPoints;
use super::tally::PathTally;
use crate::parser::{open_trace_log, Token, TraceLine};
use crate::utils::error::AggregateError;
use log::debug;
use std::path::Path;

/// All state for one aggregation run
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Hit flags for points `1..=N`
    pub points: MeasurementPoints,

    /// Completed paths
    pub tally: PathTally,

    current: Vec<String>,
    // Tokens appended since the last `end`, or a `start` with no `end` yet
    unterminated: bool,
    lines_read: usize,
}

impl RunContext {
    /// Fresh context for `point_count` measurement points
    pub fn new(point_count: usize) -> Self {
        Self {
            points: MeasurementPoints::new(point_count),
            tally: PathTally::new(),
            current: Vec::new(),
            unterminated: false,
            lines_read: 0,
        }
    }

    /// Apply one classified line
    ///
    /// # Errors
    /// * `AggregateError::OutOfRangeIndex` - point outside `1..=N`
    pub fn apply(&mut self, line: TraceLine) -> Result<(), AggregateError> {
        self.lines_read += 1;

        match line.token {
            Token::Start => {
                self.current.clear();
                self.unterminated = true;
            }
            Token::End => {
                self.tally.record(self.current.join(" "));
                self.unterminated = false;
            }
            Token::Point(id) => {
                self.points.mark(line.number, id)?;
                self.current.push(line.text);
                self.unterminated = true;
            }
        }

        Ok(())
    }

    /// Number of log lines applied so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Whether the log so far ends inside an unterminated record
    pub fn has_open_record(&self) -> bool {
        self.unterminated
    }
}

/// Fold a stream of trace lines into `context`
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `context` - Run state to extend (usually `RunContext::new(n)`)
/// * `lines` - Classified lines, consumed once
///
/// # Returns
/// The updated context; nothing is returned on the first error
pub fn aggregate<I>(mut context: RunContext, lines: I) -> Result<RunContext, AggregateError>
where
    I: IntoIterator<Item = Result<TraceLine, AggregateError>>,
{
    for line in lines {
        context.apply(line?)?;
    }

    if context.has_open_record() {
        debug!(
            "Dropping unterminated record at end of log ({} tokens)",
            context.current.len()
        );
    }

    debug!(
        "Aggregated {} lines into {} distinct paths",
        context.lines_read,
        context.tally.len()
    );

    Ok(context)
}

/// Aggregate the trace log at `path` for `point_count` points
///
/// # Errors
/// * `AggregateError::InputUnavailable` - log cannot be opened
/// * any error from [`aggregate`]
pub fn aggregate_file(point_count: usize, path: impl AsRef<Path>) -> Result<RunContext, AggregateError> {
    let lines = open_trace_log(path)?;
    aggregate(RunContext::new(point_count), lines)
}
