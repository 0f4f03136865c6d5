//! Cross-tool comparison and the aggregate document.
//!
//! - [`ComparisonAggregator`]: runs the matcher for every file and competitor
//!   and rolls up per-tool statistics and coverage
//! - [`ComparisonResult`]: the serializable document a run produces
//!
//! ## Coverage
//!
//! Coverage is the fraction of a competitor's errors the subject also
//! reported. Per file it is `common / competitor_errors`; overall it is
//! `sum(common) / sum(competitor_errors)`. Both are `1.0` when the competitor
//! reported no errors.
//!
//! ## Example
//!
//! ```rust
//! use truss_compare::comparison::ComparisonAggregator;
//! use truss_compare::core::{ComparisonConfig, Diagnostic, ToolFileResult, ToolResults};
//!
//! let mut results = ToolResults::new();
//! results.insert("actionlint", ToolFileResult::new(
//!     "ci.yml",
//!     vec![Diagnostic::new("unknown key").with_severity("error").at_line(3, 1)],
//! ));
//!
//! let aggregator = ComparisonAggregator::new(ComparisonConfig::default());
//! let result = aggregator.aggregate(&results);
//!
//! assert_eq!(result.coverage_analysis.get("actionlint").unwrap().coverage, 0.0);
//! ```

pub mod aggregator;
pub mod document;

pub use aggregator::ComparisonAggregator;
pub use document::{
    CompetitorComparison, ComparisonResult, CoverageSummary, DocumentError, FileComparison,
    FileToolResult, Summary, ToolStats,
};
