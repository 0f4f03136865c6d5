use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::matching::engine::MatchingConfig;
use crate::utils::validation::{validate_threshold, validate_tool_name, ValidationError};

/// Tool evaluated by default
pub const DEFAULT_SUBJECT: &str = "truss";

/// Tools the subject is compared against by default, in report order
pub const DEFAULT_COMPETITORS: [&str; 3] = ["actionlint", "yamllint", "yaml-language-server"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid tool name '{name}': {source}")]
    InvalidToolName {
        name: String,
        source: ValidationError,
    },

    #[error("Invalid similarity threshold: {0}")]
    InvalidThreshold(ValidationError),

    #[error("Subject '{0}' is also listed as a competitor")]
    SubjectIsCompetitor(String),

    #[error("Competitor '{0}' is listed more than once")]
    DuplicateCompetitor(String),
}

/// Tool roster and matching parameters for one comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// The tool being evaluated
    pub subject: String,

    /// Tools whose findings the subject should reproduce
    pub competitors: Vec<String>,

    pub matching: MatchingConfig,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            competitors: DEFAULT_COMPETITORS.iter().map(ToString::to_string).collect(),
            matching: MatchingConfig::default(),
        }
    }
}

impl ComparisonConfig {
    /// Load a config from a JSON file. Absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read,
    /// `ConfigError::ParseError` for malformed JSON, or a validation error.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a config from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed JSON, or a validation error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// All tools, subject first
    #[must_use]
    pub fn tools(&self) -> Vec<&str> {
        std::iter::once(self.subject.as_str())
            .chain(self.competitors.iter().map(String::as_str))
            .collect()
    }

    /// The competitor the headline summary is computed against
    #[must_use]
    pub fn primary_competitor(&self) -> Option<&str> {
        self.competitors.first().map(String::as_str)
    }

    /// Check tool names, roster consistency, and matching parameters
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.tools() {
            validate_tool_name(name).map_err(|source| ConfigError::InvalidToolName {
                name: name.to_string(),
                source,
            })?;
        }

        let mut seen = HashSet::new();
        for competitor in &self.competitors {
            if *competitor == self.subject {
                return Err(ConfigError::SubjectIsCompetitor(competitor.clone()));
            }
            if !seen.insert(competitor.as_str()) {
                return Err(ConfigError::DuplicateCompetitor(competitor.clone()));
            }
        }

        validate_threshold(self.matching.similarity_threshold)
            .map_err(ConfigError::InvalidThreshold)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let config = ComparisonConfig::default();
        assert_eq!(
            config.tools(),
            vec!["truss", "actionlint", "yamllint", "yaml-language-server"]
        );
        assert_eq!(config.primary_competitor(), Some("actionlint"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = ComparisonConfig::from_json(
            r#"{"competitors": ["actionlint"], "matching": {"similarity_threshold": 0.8}}"#,
        )
        .unwrap();
        assert_eq!(config.subject, "truss");
        assert_eq!(config.competitors, vec!["actionlint"]);
        assert!((config.matching.similarity_threshold - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.matching.line_tolerance, 2);
    }

    #[test]
    fn test_subject_cannot_compete_with_itself() {
        let config = ComparisonConfig {
            competitors: vec!["truss".to_string()],
            ..ComparisonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SubjectIsCompetitor(_))
        ));
    }

    #[test]
    fn test_duplicate_competitor_rejected() {
        let config = ComparisonConfig {
            competitors: vec!["actionlint".to_string(), "actionlint".to_string()],
            ..ComparisonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateCompetitor(_))
        ));
    }

    #[test]
    fn test_tool_name_with_path_rejected() {
        let config = ComparisonConfig {
            subject: "../truss".to_string(),
            ..ComparisonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidToolName { .. })
        ));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let result = ComparisonConfig::from_json(r#"{"matching": {"similarity_threshold": 1.5}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidThreshold(_))));
    }
}
