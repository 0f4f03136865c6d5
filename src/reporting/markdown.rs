use std::fmt::Write;

use crate::comparison::document::ComparisonResult;
use crate::reporting::{percent, MAX_FILES_IN_REPORT};

/// Render the comparison as a Markdown report
#[must_use]
pub fn render_markdown(result: &ComparisonResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_markdown(&mut out, result);
    out
}

fn write_markdown(out: &mut String, result: &ComparisonResult) -> std::fmt::Result {
    let summary = &result.summary;
    let competitor = summary.primary_competitor.as_deref().unwrap_or("competitor");

    writeln!(out, "# Validation Tool Comparison Report\n")?;
    writeln!(out, "**Generated:** {}\n", result.timestamp)?;

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total Files Analyzed:** {}", summary.total_files)?;
    writeln!(
        out,
        "- **Total Errors ({}):** {}",
        summary.subject, summary.total_errors_subject
    )?;
    writeln!(
        out,
        "- **Total Errors ({competitor}):** {}",
        summary.total_errors_competitor
    )?;
    writeln!(
        out,
        "- **{} Coverage:** {}",
        summary.subject,
        percent(summary.coverage_subject)
    )?;
    writeln!(
        out,
        "- **Avg Time ({}):** {:.2}ms",
        summary.subject, summary.avg_time_subject_ms
    )?;
    writeln!(
        out,
        "- **Avg Time ({competitor}):** {:.2}ms",
        summary.avg_time_competitor_ms
    )?;
    writeln!(out, "- **Speedup:** {:.1}x\n", summary.speedup())?;

    writeln!(out, "## Coverage Analysis\n")?;
    for (tool, coverage) in result.coverage_analysis.iter() {
        writeln!(out, "### {tool}\n")?;
        writeln!(out, "- **Total Errors:** {}", coverage.total_errors)?;
        writeln!(
            out,
            "- **{} Found:** {}",
            summary.subject, coverage.subject_found
        )?;
        writeln!(out, "- **Coverage:** {}\n", percent(coverage.coverage))?;
    }

    writeln!(out, "## Tool Statistics\n")?;
    writeln!(
        out,
        "| Tool | Files Analyzed | Errors Found | Avg Time (ms) | Total Time (ms) |"
    )?;
    writeln!(
        out,
        "|------|----------------|--------------|---------------|-----------------|"
    )?;
    for (tool, stats) in result.tools.iter() {
        writeln!(
            out,
            "| {tool} | {} | {} | {:.2} | {:.2} |",
            stats.files_analyzed, stats.errors_found, stats.avg_time_ms, stats.total_time_ms
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## File-by-File Breakdown\n")?;
    for file in result.files.iter().take(MAX_FILES_IN_REPORT) {
        writeln!(out, "### {}\n", file.path)?;

        writeln!(out, "**Tool Results:**")?;
        for (tool, figures) in file.tools.iter() {
            writeln!(
                out,
                "- **{tool}:** {} errors, {:.2}ms",
                figures.errors, figures.duration_ms
            )?;
        }
        writeln!(out)?;

        if !file.comparison.is_empty() {
            writeln!(out, "**Comparison:**")?;
            for (tool, cmp) in file.comparison.iter() {
                writeln!(
                    out,
                    "- vs **{tool}:** {} common, {} unique to {}, {} unique to {tool}",
                    cmp.errors_in_common,
                    cmp.unique_to_subject,
                    summary.subject,
                    cmp.unique_to_competitor
                )?;
            }
        }
        writeln!(out)?;
    }

    if result.files.len() > MAX_FILES_IN_REPORT {
        writeln!(
            out,
            "\n*... and {} more files*",
            result.files.len() - MAX_FILES_IN_REPORT
        )?;
    }

    Ok(())
}
