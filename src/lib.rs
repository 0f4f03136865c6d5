//! # truss-compare
//!
//! A library for reconciling diagnostics reported by several workflow
//! validators over the same set of files.
//!
//! Validators rarely agree on wording or exact positions: one tool reports
//! `missing field 'name'` at line 5, another `Missing field: name` at line 6,
//! and truss reports a byte span instead of a line. `truss-compare` pairs up
//! such findings and measures how much of each competitor's output the subject
//! tool (truss by default) reproduces.
//!
//! ## Features
//!
//! - **Location gate**: only errors on the same file within a few lines are compared
//! - **Fuzzy messages**: case, whitespace, and YAML file paths are folded away
//!   before a character-level similarity is computed
//! - **Greedy one-to-one matching**: each error is used in at most one pair
//! - **Coverage**: per file and overall, for every competitor
//! - **Reports**: Markdown and HTML summaries of the aggregate document
//!
//! ## Example
//!
//! ```rust
//! use truss_compare::{ComparisonAggregator, ComparisonConfig, Diagnostic, ToolFileResult, ToolResults};
//!
//! let mut results = ToolResults::new();
//! results.insert("truss", ToolFileResult::new(
//!     "file.yml",
//!     vec![Diagnostic::new("missing field 'name'").with_severity("error").at_line(5, 0)],
//! ));
//! results.insert("actionlint", ToolFileResult::new(
//!     "file.yml",
//!     vec![Diagnostic::new("Missing field: name").with_severity("error").at_line(5, 0)],
//! ));
//!
//! let result = ComparisonAggregator::new(ComparisonConfig::default()).aggregate(&results);
//! let coverage = result.coverage_analysis.get("actionlint").unwrap();
//! assert_eq!(coverage.subject_found, 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Diagnostics, per-tool results, and configuration
//! - [`matching`]: Location/message normalization, similarity, and the matcher
//! - [`parsing`]: Loading result files from a results directory
//! - [`comparison`]: Aggregation and the output document
//! - [`reporting`]: Markdown and HTML rendering
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod comparison;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod reporting;
pub mod utils;

// Re-export commonly used types for convenience
pub use comparison::{ComparisonAggregator, ComparisonResult};
pub use core::config::ComparisonConfig;
pub use core::diagnostic::{CanonicalLocation, Diagnostic};
pub use core::types::{ToolFileResult, ToolResults};
pub use matching::engine::{MatchOutcome, MatchingConfig, MatchingEngine};
