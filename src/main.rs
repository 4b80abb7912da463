//! Coverage Paths CLI
//!
//! Reads the measurement point count, aggregates `coverage.txt` and
//! writes `paths.txt`. Running without a subcommand does exactly that
//! with every default.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use coverage_paths::commands::{
    display_version, execute_aggregate, validate_args, validate_summary_file, AggregateArgs,
};
use coverage_paths::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Coverage Paths - path frequencies and point coverage from trace logs
#[derive(Parser, Debug)]
#[command(name = "coverage-paths")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to `aggregate`)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a trace log into a path report
    Aggregate {
        /// Trace log to read
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// Path report to write (overwritten)
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Number of measurement points (read from stdin if omitted)
        #[arg(short = 'n', long)]
        points: Option<usize>,

        /// Output path for a JSON summary (optional)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Output path for a markdown hit list (optional)
        #[arg(long)]
        markdown: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a JSON summary file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        None => run_aggregate(AggregateArgs::default())?,

        Some(Commands::Aggregate {
            input,
            output,
            points,
            json,
            markdown,
            summary,
        }) => {
            let args = AggregateArgs {
                input,
                output,
                point_count: points,
                output_json: json,
                output_markdown: markdown,
                print_summary: summary,
            };
            run_aggregate(args)?;
        }

        Some(Commands::Validate { file }) => {
            validate_summary_file(file)?;
        }

        Some(Commands::Version) => {
            display_version();
        }
    }

    Ok(())
}

fn run_aggregate(args: AggregateArgs) -> Result<()> {
    // Validate args first
    validate_args(&args)?;
    execute_aggregate(args)?;
    Ok(())
}
