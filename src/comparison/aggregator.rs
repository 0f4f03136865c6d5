use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;

use crate::comparison::document::{
    CompetitorComparison, ComparisonResult, CoverageSummary, FileComparison, FileToolResult,
    Summary, ToolStats,
};
use crate::core::config::ComparisonConfig;
use crate::core::diagnostic::Diagnostic;
use crate::core::types::ToolResults;
use crate::matching::engine::MatchingEngine;
use crate::utils::validation::{count_to_f64, ratio_or};

/// Running totals for one aggregation, built fresh per call
#[derive(Debug, Default)]
struct Accumulator {
    stats: IndexMap<String, ToolStats>,
    /// Competitor -> errors the subject also reported, summed over files
    common: IndexMap<String, usize>,
}

/// Runs the matcher over every file and competitor and rolls up the results
#[derive(Debug, Clone)]
pub struct ComparisonAggregator {
    config: ComparisonConfig,
    engine: MatchingEngine,
}

impl ComparisonAggregator {
    #[must_use]
    pub fn new(config: ComparisonConfig) -> Self {
        let engine = MatchingEngine::with_config(config.matching.clone());
        Self { config, engine }
    }

    /// Aggregate `results`, stamped with the current time
    #[must_use]
    pub fn aggregate(&self, results: &ToolResults) -> ComparisonResult {
        self.aggregate_at(results, Utc::now())
    }

    /// Aggregate `results` with an explicit timestamp.
    ///
    /// Only diagnostics with severity "error" are counted or matched. Every
    /// file any roster tool reported on is compared; a tool without a result
    /// for a file counts as zero errors, zero time, and valid.
    #[must_use]
    pub fn aggregate_at(&self, results: &ToolResults, timestamp: DateTime<Utc>) -> ComparisonResult {
        let tools = self.config.tools();
        let mut acc = Accumulator::default();
        for tool in &tools {
            acc.stats.insert((*tool).to_string(), ToolStats::default());
        }
        for competitor in &self.config.competitors {
            acc.common.insert(competitor.clone(), 0);
        }

        let all_files = results.all_files(&tools);
        let files: Vec<FileComparison> = all_files
            .iter()
            .map(|file| self.compare_file(file, results, &tools, &mut acc))
            .collect();

        for stats in acc.stats.values_mut() {
            if stats.files_analyzed > 0 {
                stats.avg_time_ms = stats.total_time_ms / count_to_f64(stats.files_analyzed);
            }
        }

        let mut coverage_analysis = IndexMap::new();
        for competitor in &self.config.competitors {
            let total_errors = acc.stats.get(competitor).map_or(0, |s| s.errors_found);
            let subject_found = acc.common.get(competitor).copied().unwrap_or(0);
            coverage_analysis.insert(
                competitor.clone(),
                CoverageSummary {
                    total_errors,
                    subject_found,
                    coverage: ratio_or(subject_found, total_errors, 1.0),
                },
            );
        }

        let summary = self.summarize(all_files.len(), &acc.stats, &coverage_analysis);

        ComparisonResult {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            files_analyzed: all_files.len(),
            tools: acc.stats,
            coverage_analysis,
            files,
            summary,
        }
    }

    fn compare_file(
        &self,
        file: &str,
        results: &ToolResults,
        tools: &[&str],
        acc: &mut Accumulator,
    ) -> FileComparison {
        let mut file_tools = IndexMap::new();
        let mut errors: HashMap<&str, Vec<Diagnostic>> = HashMap::new();

        for tool in tools {
            let (tool_errors, figures) = match results.get(tool, file) {
                Some(result) => {
                    let tool_errors = result.errors();
                    if let Some(stats) = acc.stats.get_mut(*tool) {
                        stats.errors_found += tool_errors.len();
                        stats.files_analyzed += 1;
                        stats.total_time_ms += result.duration_ms;
                    }
                    let figures = FileToolResult {
                        errors: tool_errors.len(),
                        duration_ms: result.duration_ms,
                        valid: result.valid,
                    };
                    (tool_errors, figures)
                }
                None => (Vec::new(), FileToolResult::default()),
            };
            file_tools.insert((*tool).to_string(), figures);
            errors.insert(*tool, tool_errors);
        }

        let empty = Vec::new();
        let subject_errors = errors.get(self.config.subject.as_str()).unwrap_or(&empty);

        let mut comparison = IndexMap::new();
        for competitor in &self.config.competitors {
            let competitor_errors = errors.get(competitor.as_str()).unwrap_or(&empty);
            let outcome = self
                .engine
                .match_diagnostics(subject_errors, competitor_errors, file);

            if let Some(total) = acc.common.get_mut(competitor) {
                *total += outcome.common.len();
            }

            debug!(
                file = %file,
                competitor = %competitor,
                common = outcome.common.len(),
                unique_to_subject = outcome.unique_to_a.len(),
                unique_to_competitor = outcome.unique_to_b.len(),
                "Compared file"
            );

            comparison.insert(
                competitor.clone(),
                CompetitorComparison {
                    errors_in_common: outcome.common.len(),
                    unique_to_subject: outcome.unique_to_a.len(),
                    unique_to_competitor: outcome.unique_to_b.len(),
                    subject_coverage: ratio_or(
                        outcome.common.len(),
                        competitor_errors.len(),
                        1.0,
                    ),
                },
            );
        }

        FileComparison {
            path: file.to_string(),
            tools: file_tools,
            comparison,
        }
    }

    fn summarize(
        &self,
        total_files: usize,
        stats: &IndexMap<String, ToolStats>,
        coverage: &IndexMap<String, CoverageSummary>,
    ) -> Summary {
        let subject_stats = stats.get(&self.config.subject).cloned().unwrap_or_default();
        let primary = self.config.primary_competitor();
        let competitor_stats = primary
            .and_then(|name| stats.get(name))
            .cloned()
            .unwrap_or_default();

        Summary {
            subject: self.config.subject.clone(),
            primary_competitor: primary.map(ToString::to_string),
            total_files,
            total_errors_subject: subject_stats.errors_found,
            total_errors_competitor: competitor_stats.errors_found,
            coverage_subject: primary
                .and_then(|name| coverage.get(name))
                .map_or(0.0, |c| c.coverage),
            avg_time_subject_ms: subject_stats.avg_time_ms,
            avg_time_competitor_ms: competitor_stats.avg_time_ms,
        }
    }
}
