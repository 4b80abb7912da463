//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod aggregate;
pub mod utils;

// Re-export main command functions
pub use aggregate::{execute_aggregate, validate_args, AggregateArgs};
pub use utils::{display_version, validate_summary_file};
