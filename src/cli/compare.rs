use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::comparison::{ComparisonAggregator, ComparisonResult};
use crate::core::config::ComparisonConfig;
use crate::parsing::results::load_results;

#[derive(Args)]
pub struct CompareArgs {
    /// Directory with one subdirectory of JSON result files per tool
    #[arg(required = true)]
    pub results_dir: PathBuf,

    /// Write the JSON document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON config file with subject, competitors, and matching settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tool being evaluated (default: truss)
    #[arg(long)]
    pub subject: Option<String>,

    /// Tool to compare against; repeat for several (default: actionlint, yamllint, yaml-language-server)
    #[arg(long = "competitor", value_name = "NAME")]
    pub competitors: Vec<String>,

    /// Minimum message similarity (0.0-1.0) for two errors to match
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Maximum line distance for two errors to be compared
    #[arg(long)]
    pub line_tolerance: Option<u64>,
}

/// Execute compare subcommand
///
/// # Errors
///
/// Returns an error if the config is invalid, the results directory is
/// missing, or the document cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = build_config(&args)?;

    if verbose {
        eprintln!(
            "Comparing {} against [{}] (threshold {}, line tolerance {})",
            config.subject,
            config.competitors.join(", "),
            config.matching.similarity_threshold,
            config.matching.line_tolerance
        );
    }

    let results = load_results(&args.results_dir, &config.tools())?;
    let comparison = ComparisonAggregator::new(config).aggregate(&results);

    if let Some(path) = &args.output {
        comparison
            .write_to_file(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Comparison results written to: {}", path.display());
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", comparison.to_json()?),
        OutputFormat::Text => print_text_summary(&comparison),
        OutputFormat::Tsv => print_tsv(&comparison),
    }

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied, validated
fn build_config(args: &CompareArgs) -> anyhow::Result<ComparisonConfig> {
    let mut config = match &args.config {
        Some(path) => ComparisonConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ComparisonConfig::default(),
    };

    if let Some(subject) = &args.subject {
        config.subject.clone_from(subject);
    }
    if !args.competitors.is_empty() {
        config.competitors.clone_from(&args.competitors);
    }
    if let Some(threshold) = args.threshold {
        config.matching.similarity_threshold = threshold;
    }
    if let Some(tolerance) = args.line_tolerance {
        config.matching.line_tolerance = tolerance;
    }

    config.validate()?;
    Ok(config)
}

fn print_text_summary(comparison: &ComparisonResult) {
    let summary = &comparison.summary;

    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    println!("\nGenerated: {}", comparison.timestamp);
    println!("Files analyzed: {}", comparison.files_analyzed);

    println!("\nTools:");
    for (tool, stats) in comparison.tools.iter() {
        println!(
            "  {tool}: {} errors in {} files, avg {:.2}ms",
            stats.errors_found, stats.files_analyzed, stats.avg_time_ms
        );
    }

    println!("\nCoverage ({} vs. competitor):", summary.subject);
    for (tool, coverage) in comparison.coverage_analysis.iter() {
        println!(
            "  {tool}: {}/{} ({:.1}%)",
            coverage.subject_found,
            coverage.total_errors,
            coverage.coverage * 100.0
        );
    }

    if let Some(competitor) = &summary.primary_competitor {
        println!("\nSpeedup vs. {competitor}: {:.1}x", summary.speedup());
    }
}

fn print_tsv(comparison: &ComparisonResult) {
    println!(
        "path\tcompetitor\terrors_in_common\tunique_to_subject\tunique_to_competitor\tsubject_coverage"
    );
    for file in &comparison.files {
        for (tool, cmp) in file.comparison.iter() {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{:.4}",
                file.path,
                tool,
                cmp.errors_in_common,
                cmp.unique_to_subject,
                cmp.unique_to_competitor,
                cmp.subject_coverage,
            );
        }
    }
}
