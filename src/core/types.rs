use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::core::diagnostic::Diagnostic;

/// One tool's output for one analyzed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFileResult {
    /// Path of the analyzed file as reported by the tool
    pub file: String,

    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,

    #[serde(default)]
    pub duration_ms: f64,

    #[serde(default = "default_valid")]
    pub valid: bool,
}

fn default_valid() -> bool {
    true
}

impl ToolFileResult {
    #[must_use]
    pub fn new(file: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            file: file.into(),
            diagnostics,
            duration_ms: 0.0,
            valid: true,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Diagnostics whose severity is "error"
    #[must_use]
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.is_error())
            .cloned()
            .collect()
    }
}

/// Loaded results for every tool: tool name -> analyzed path -> result
#[derive(Debug, Clone, Default)]
pub struct ToolResults {
    by_tool: HashMap<String, BTreeMap<String, ToolFileResult>>,
}

impl ToolResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all results for `tool`
    pub fn set_tool(&mut self, tool: impl Into<String>, results: BTreeMap<String, ToolFileResult>) {
        self.by_tool.insert(tool.into(), results);
    }

    /// Insert a single result, keyed by its `file`
    pub fn insert(&mut self, tool: impl Into<String>, result: ToolFileResult) {
        self.by_tool
            .entry(tool.into())
            .or_default()
            .insert(result.file.clone(), result);
    }

    #[must_use]
    pub fn get(&self, tool: &str, file: &str) -> Option<&ToolFileResult> {
        self.by_tool.get(tool).and_then(|files| files.get(file))
    }

    /// Number of files with a result for `tool`
    #[must_use]
    pub fn file_count(&self, tool: &str) -> usize {
        self.by_tool.get(tool).map_or(0, BTreeMap::len)
    }

    /// Union of analyzed paths across `tools`, ascending
    #[must_use]
    pub fn all_files(&self, tools: &[&str]) -> BTreeSet<&str> {
        tools
            .iter()
            .filter_map(|tool| self.by_tool.get(*tool))
            .flat_map(|files| files.keys().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_file_result_defaults() {
        let result: ToolFileResult = serde_json::from_str(r#"{"file": "ci.yml"}"#).unwrap();
        assert_eq!(result.file, "ci.yml");
        assert!(result.diagnostics.is_empty());
        assert!(result.duration_ms.abs() < f64::EPSILON);
        assert!(result.valid);
    }

    #[test]
    fn test_errors_filters_severity() {
        let result = ToolFileResult::new(
            "ci.yml",
            vec![
                Diagnostic::new("a").with_severity("error"),
                Diagnostic::new("b").with_severity("warning"),
                Diagnostic::new("c").with_severity("Error"),
            ],
        );
        let errors = result.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "a");
        assert_eq!(errors[1].message, "c");
    }

    #[test]
    fn test_all_files_is_sorted_union() {
        let mut results = ToolResults::new();
        results.insert("truss", ToolFileResult::new("b.yml", vec![]));
        results.insert("actionlint", ToolFileResult::new("a.yml", vec![]));
        results.insert("actionlint", ToolFileResult::new("b.yml", vec![]));

        let files: Vec<&str> = results.all_files(&["truss", "actionlint"]).into_iter().collect();
        assert_eq!(files, vec!["a.yml", "b.yml"]);
        let files: Vec<&str> = results.all_files(&["truss"]).into_iter().collect();
        assert_eq!(files, vec!["b.yml"]);
        assert_eq!(results.file_count("actionlint"), 2);
        assert_eq!(results.file_count("yamllint"), 0);
    }
}
