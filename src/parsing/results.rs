use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::types::{ToolFileResult, ToolResults};
use crate::utils::validation::preview;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Results directory not found: {0}")]
    ResultsDirNotFound(PathBuf),

    #[error("Results path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid results path pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Problems with a single result file; these never abort a run
#[derive(Error, Debug)]
pub enum ResultFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Load results for every tool under `results_dir/<tool>/*.json`.
///
/// A missing tool directory or an unreadable result file only costs that
/// tool's data; the run continues.
///
/// # Errors
///
/// Returns `LoadError::ResultsDirNotFound` or `LoadError::NotADirectory` if
/// `results_dir` itself is unusable.
pub fn load_results(results_dir: &Path, tools: &[&str]) -> Result<ToolResults, LoadError> {
    if !results_dir.exists() {
        return Err(LoadError::ResultsDirNotFound(results_dir.to_path_buf()));
    }
    if !results_dir.is_dir() {
        return Err(LoadError::NotADirectory(results_dir.to_path_buf()));
    }

    let mut results = ToolResults::new();
    for tool in tools {
        let tool_results = load_tool_results(results_dir, tool)?;
        if tool_results.is_empty() {
            warn!(tool = %tool, "No valid results found");
        } else {
            info!(tool = %tool, count = tool_results.len(), "Loaded results");
        }
        results.set_tool(*tool, tool_results);
    }

    Ok(results)
}

/// Load every `*.json` file in `results_dir/<tool>`, keyed by analyzed path.
///
/// Files are read in sorted order; a later record for the same analyzed path
/// replaces an earlier one.
///
/// # Errors
///
/// Returns `LoadError::Pattern` if the directory path cannot be turned into a
/// search pattern.
pub fn load_tool_results(
    results_dir: &Path,
    tool: &str,
) -> Result<BTreeMap<String, ToolFileResult>, LoadError> {
    let tool_dir = results_dir.join(tool);
    let mut results = BTreeMap::new();

    if !tool_dir.is_dir() {
        warn!(tool = %tool, path = %tool_dir.display(), "Tool results directory not found");
        return Ok(results);
    }

    let pattern = format!(
        "{}/*.json",
        glob::Pattern::escape(&tool_dir.to_string_lossy())
    );
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => warn!(path = %e.path().display(), "Failed to access result file: {}", e),
        }
    }
    paths.sort();

    for path in paths {
        match read_result_file(&path) {
            Ok(records) => {
                for record in records {
                    results.insert(record.file.clone(), record);
                }
            }
            Err(ResultFileError::InvalidJson(e)) => {
                let snippet = std::fs::read_to_string(&path).unwrap_or_default();
                warn!(
                    path = %path.display(),
                    preview = %preview(&snippet),
                    "Invalid JSON in result file: {}",
                    e
                );
            }
            Err(e) => {
                warn!(path = %path.display(), "Failed to load result file: {}", e);
            }
        }
    }

    Ok(results)
}

/// Read one result file
///
/// # Errors
///
/// Returns `ResultFileError::Io` if the file cannot be read, or
/// `ResultFileError::InvalidJson` if it is not valid JSON.
pub fn read_result_file(path: &Path) -> Result<Vec<ToolFileResult>, ResultFileError> {
    let content = std::fs::read_to_string(path)?;
    let records = parse_result_text(&content)?;
    debug!(path = %path.display(), records = records.len(), "Read result file");
    Ok(records)
}

/// Parse result file content: a single record or an array of records.
///
/// Whitespace-only content yields no records. Records without a `file`, or
/// carrying an `error` key (the tool failed on that file), are dropped, as are
/// records that do not fit the result schema.
///
/// # Errors
///
/// Returns `ResultFileError::InvalidJson` if the content is not valid JSON.
pub fn parse_result_text(content: &str) -> Result<Vec<ToolFileResult>, ResultFileError> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let records = match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => items.into_iter().filter_map(parse_record).collect(),
        value @ Value::Object(_) => parse_record(value).into_iter().collect(),
        other => {
            warn!("Ignoring result content that is neither an object nor an array: {other}");
            Vec::new()
        }
    };

    Ok(records)
}

fn parse_record(value: Value) -> Option<ToolFileResult> {
    let file = value.get("file").and_then(Value::as_str).unwrap_or_default();
    if file.is_empty() {
        debug!("Skipping result record without a file path");
        return None;
    }

    if value.get("error").is_some() {
        debug!(file = %file, "Skipping result record reporting a tool error");
        return None;
    }

    let file = file.to_string();
    match serde_json::from_value::<ToolFileResult>(value) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(file = %file, "Skipping malformed result record: {}", e);
            None
        }
    }
}
