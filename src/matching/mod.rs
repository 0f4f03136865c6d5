//! Diagnostic matching engine and its normalizers.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchingEngine`]: pairs diagnostics from two tools for the same file
//! - [`normalize_location`]: maps line/column or span locations to a comparable triple
//! - [`normalize_message`]: case/whitespace folding and YAML path redaction
//! - [`similarity`]: character-level sequence similarity in `[0, 1]`
//!
//! ## Matching Algorithm
//!
//! For every diagnostic on side A, in list order:
//!
//! 1. **Location gate**: only unclaimed side-B diagnostics on the same file and
//!    within `line_tolerance` lines are considered. Columns are ignored.
//! 2. **Ranking**: candidates are ranked by message similarity; the first
//!    candidate with the strictly highest score is kept.
//! 3. **Threshold**: the best candidate is claimed if its score is at least
//!    `similarity_threshold`; otherwise the A diagnostic is unique to A.
//!
//! Anything on side B left unclaimed is unique to B. The pass is greedy and
//! order-dependent; it does not search for a globally optimal assignment.
//!
//! ## Example
//!
//! ```rust
//! use truss_compare::core::Diagnostic;
//! use truss_compare::matching::{MatchingConfig, MatchingEngine};
//!
//! let truss = vec![Diagnostic::new("missing field 'name'").at_line(5, 0)];
//! let actionlint = vec![Diagnostic::new("Missing field: name").at_line(5, 0)];
//!
//! let engine = MatchingEngine::with_config(MatchingConfig::default());
//! let outcome = engine.match_diagnostics(&truss, &actionlint, "ci.yml");
//!
//! assert_eq!(outcome.common.len(), 1);
//! assert!(outcome.unique_to_a.is_empty());
//! assert!(outcome.unique_to_b.is_empty());
//! ```

pub mod engine;
pub mod location;
pub mod message;
pub mod scoring;

pub use engine::{DiagnosticMatch, MatchOutcome, MatchingConfig, MatchingEngine};
pub use location::normalize_location;
pub use message::normalize_message;
pub use scoring::similarity;
