use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::comparison::ComparisonResult;
use crate::reporting::{render_html, render_markdown};

#[derive(Args)]
pub struct ReportArgs {
    /// Comparison document written by `compare`
    #[arg(required = true)]
    pub input: PathBuf,

    /// Directory to write summary.md and summary.html into
    #[arg(short, long, default_value = "test-suite/comparison/reports")]
    pub output_dir: PathBuf,
}

/// Execute report subcommand
///
/// # Errors
///
/// Returns an error if the comparison document is missing or malformed, or
/// the reports cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReportArgs, verbose: bool) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Comparison file not found: {}", args.input.display());
    }

    let comparison = ComparisonResult::load_from_file(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Loaded comparison of {} files from {}",
            comparison.files_analyzed,
            args.input.display()
        );
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    let markdown_path = args.output_dir.join("summary.md");
    std::fs::write(&markdown_path, render_markdown(&comparison))
        .with_context(|| format!("Failed to write {}", markdown_path.display()))?;
    eprintln!("Markdown report written to: {}", markdown_path.display());

    let html_path = args.output_dir.join("summary.html");
    std::fs::write(&html_path, render_html(&comparison))
        .with_context(|| format!("Failed to write {}", html_path.display()))?;
    eprintln!("HTML report written to: {}", html_path.display());

    Ok(())
}
