use std::fmt::Write;

use crate::comparison::document::ComparisonResult;
use crate::reporting::percent;

const STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 20px; }
        h1 { color: #333; }
        h2 { color: #666; margin-top: 30px; }
        table { border-collapse: collapse; width: 100%; margin: 20px 0; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        .metric { margin: 10px 0; }
        .coverage-good { color: green; }
        .coverage-medium { color: orange; }
        .coverage-poor { color: red; }
";

/// CSS class for a coverage ratio
#[must_use]
pub fn coverage_class(coverage: f64) -> &'static str {
    if coverage >= 0.9 {
        "coverage-good"
    } else if coverage >= 0.7 {
        "coverage-medium"
    } else {
        "coverage-poor"
    }
}

/// Escape text for inclusion in HTML element content or attribute values
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the comparison as a standalone HTML page
#[must_use]
pub fn render_html(result: &ComparisonResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_html(&mut out, result);
    out
}

fn write_html(out: &mut String, result: &ComparisonResult) -> std::fmt::Result {
    let summary = &result.summary;
    let subject = escape(&summary.subject);
    let competitor = escape(summary.primary_competitor.as_deref().unwrap_or("competitor"));

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <title>Validation Tool Comparison Report</title>")?;
    writeln!(out, "    <style>\n{STYLE}    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "    <h1>Validation Tool Comparison Report</h1>")?;
    writeln!(
        out,
        "    <p><strong>Generated:</strong> {}</p>",
        escape(&result.timestamp)
    )?;

    writeln!(out, "    <h2>Summary</h2>")?;
    let metrics = [
        ("Total Files Analyzed".to_string(), summary.total_files.to_string()),
        (
            format!("Total Errors ({subject})"),
            summary.total_errors_subject.to_string(),
        ),
        (
            format!("Total Errors ({competitor})"),
            summary.total_errors_competitor.to_string(),
        ),
        (
            format!("{subject} Coverage"),
            format!(
                "<span class=\"{}\">{}</span>",
                coverage_class(summary.coverage_subject),
                percent(summary.coverage_subject)
            ),
        ),
        (
            format!("Avg Time ({subject})"),
            format!("{:.2}ms", summary.avg_time_subject_ms),
        ),
        (
            format!("Avg Time ({competitor})"),
            format!("{:.2}ms", summary.avg_time_competitor_ms),
        ),
        ("Speedup".to_string(), format!("{:.1}x", summary.speedup())),
    ];
    for (label, value) in &metrics {
        writeln!(
            out,
            "    <div class=\"metric\"><strong>{label}:</strong> {value}</div>"
        )?;
    }

    writeln!(out, "    <h2>Coverage Analysis</h2>")?;
    writeln!(out, "    <table>")?;
    writeln!(
        out,
        "        <tr><th>Tool</th><th>Total Errors</th><th>{subject} Found</th><th>Coverage</th></tr>"
    )?;
    for (tool, coverage) in result.coverage_analysis.iter() {
        writeln!(
            out,
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>",
            escape(tool),
            coverage.total_errors,
            coverage.subject_found,
            coverage_class(coverage.coverage),
            percent(coverage.coverage)
        )?;
    }
    writeln!(out, "    </table>")?;

    writeln!(out, "    <h2>Tool Statistics</h2>")?;
    writeln!(out, "    <table>")?;
    writeln!(
        out,
        "        <tr><th>Tool</th><th>Files Analyzed</th><th>Errors Found</th><th>Avg Time (ms)</th><th>Total Time (ms)</th></tr>"
    )?;
    for (tool, stats) in result.tools.iter() {
        writeln!(
            out,
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td></tr>",
            escape(tool),
            stats.files_analyzed,
            stats.errors_found,
            stats.avg_time_ms,
            stats.total_time_ms
        )?;
    }
    writeln!(out, "    </table>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    Ok(())
}
