//! Core data types for diagnostic comparison.
//!
//! - [`Diagnostic`]: one finding emitted by one tool, with either a line/column
//!   location or a byte-offset span
//! - [`CanonicalLocation`]: the `(file, line, column)` triple used for comparison
//! - [`ToolFileResult`], [`ToolResults`]: loaded per-tool, per-file output
//! - [`ComparisonConfig`]: subject, competitors, and matching parameters
//!
//! ## Input Shapes
//!
//! | Tool style | Location field | Example |
//! |------------|----------------|---------|
//! | line-oriented (actionlint, yamllint) | `location: {line, column}` | `{"line": 5, "column": 3}` |
//! | span-oriented (truss) | `span: {start, end}` | `{"start": 120, "end": 134}` |

pub mod config;
pub mod diagnostic;
pub mod types;

pub use config::ComparisonConfig;
pub use diagnostic::{CanonicalLocation, Diagnostic};
pub use types::{ToolFileResult, ToolResults};
