//! Loading per-tool result files from a results directory.
//!
//! The expected layout is one subdirectory per tool, each holding JSON files:
//!
//! ```text
//! results/
//!   truss/        ci.json, release.json, ...
//!   actionlint/   ci.json, ...
//!   yamllint/     batch.json
//! ```
//!
//! Each file contains either one record or an array of records:
//!
//! | Field | Description | Required |
//! |-------|-------------|----------|
//! | file  | Path of the analyzed file | Yes |
//! | diagnostics | List of diagnostics | No (default `[]`) |
//! | duration_ms | Wall time spent on the file | No (default `0`) |
//! | valid | Whether the tool considered the file valid | No (default `true`) |
//! | error | Tool failed on this file; the record is ignored | No |
//!
//! ## Example
//!
//! ```rust,no_run
//! use truss_compare::parsing::results::load_results;
//! use std::path::Path;
//!
//! let results = load_results(Path::new("test-suite/results"), &["truss", "actionlint"]).unwrap();
//! println!("{} files analyzed by truss", results.file_count("truss"));
//! ```

pub mod results;
