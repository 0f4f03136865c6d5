use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Comparison document IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid comparison document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Running totals for one tool across all files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolStats {
    pub errors_found: usize,
    pub files_analyzed: usize,
    pub total_time_ms: f64,
    pub avg_time_ms: f64,
}

/// How much of one competitor's output the subject reproduced, over all files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Errors the competitor reported
    pub total_errors: usize,
    /// Of those, how many the subject also reported
    pub subject_found: usize,
    pub coverage: f64,
}

/// One tool's figures for one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileToolResult {
    pub errors: usize,
    pub duration_ms: f64,
    pub valid: bool,
}

impl Default for FileToolResult {
    /// A tool with no result for a file: no errors, no time, valid.
    fn default() -> Self {
        Self {
            errors: 0,
            duration_ms: 0.0,
            valid: true,
        }
    }
}

/// Subject vs. one competitor on one file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitorComparison {
    pub errors_in_common: usize,
    pub unique_to_subject: usize,
    pub unique_to_competitor: usize,
    pub subject_coverage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileComparison {
    pub path: String,
    pub tools: IndexMap<String, FileToolResult>,
    pub comparison: IndexMap<String, CompetitorComparison>,
}

/// Headline figures: subject vs. the primary (first) competitor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub subject: String,
    pub primary_competitor: Option<String>,
    pub total_files: usize,
    pub total_errors_subject: usize,
    pub total_errors_competitor: usize,
    pub coverage_subject: f64,
    pub avg_time_subject_ms: f64,
    pub avg_time_competitor_ms: f64,
}

impl Summary {
    /// How many times faster the subject is than the primary competitor.
    ///
    /// The subject's time is floored at 0.1 ms to keep the ratio finite.
    #[must_use]
    pub fn speedup(&self) -> f64 {
        self.avg_time_competitor_ms / self.avg_time_subject_ms.max(0.1)
    }
}

/// The aggregate document produced by one comparison run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// UTC, RFC 3339 with a trailing `Z`
    pub timestamp: String,
    pub files_analyzed: usize,
    pub tools: IndexMap<String, ToolStats>,
    pub coverage_analysis: IndexMap<String, CoverageSummary>,
    /// Ordered by path ascending
    pub files: Vec<FileComparison>,
    pub summary: Summary,
}

impl ComparisonResult {
    /// Load a previously written document
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Io` if the file cannot be read, or
    /// `DocumentError::Json` if it is not a comparison document.
    pub fn load_from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// # Errors
    ///
    /// Returns `DocumentError::Json` if `json` is not a comparison document.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON with two-space indentation
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to `path`
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Io` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), DocumentError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
