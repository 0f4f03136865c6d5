//! Command-line interface for truss-compare.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compare**: Match every tool's diagnostics against the subject's and
//!   produce the aggregate comparison document
//! - **report**: Render a comparison document as Markdown and HTML
//!
//! ## Usage
//!
//! ```text
//! # Compare results laid out as results/<tool>/*.json
//! truss-compare compare test-suite/results
//!
//! # Write the document to a file
//! truss-compare compare test-suite/results -o comparison.json
//!
//! # Stricter matching against actionlint only
//! truss-compare compare test-suite/results --competitor actionlint --threshold 0.85
//!
//! # Render reports
//! truss-compare report comparison.json --output-dir reports/
//! ```

use clap::{Parser, Subcommand};

pub mod compare;
pub mod report;

#[derive(Parser)]
#[command(name = "truss-compare")]
#[command(version)]
#[command(about = "Compare truss diagnostics against other workflow validators")]
#[command(
    long_about = "truss-compare reconciles the diagnostics several validators reported for the same files.\n\nFor each file it pairs up errors reported by the subject tool (truss by default) with errors reported by each competitor, using a line-proximity gate and fuzzy message similarity, and reports:\n- Errors in common and unique to either side, per file\n- Coverage: the fraction of each competitor's errors the subject also found\n- Per-tool error counts and timings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare tool results and compute coverage
    Compare(compare::CompareArgs),

    /// Render Markdown and HTML reports from a comparison document
    Report(report::ReportArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
    Tsv,
}
