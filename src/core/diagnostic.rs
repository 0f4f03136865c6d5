use serde::{Deserialize, Serialize};

/// Severity value retained for comparison; everything else is filtered out.
pub const ERROR_SEVERITY: &str = "error";

/// A single finding reported by one tool for one file.
///
/// Tools disagree on how they describe locations: line-oriented tools emit a
/// `location` object, while truss emits a byte-offset `span`. Both are kept
/// as-is and only reconciled through [`CanonicalLocation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Free-text message as emitted by the tool
    #[serde(default)]
    pub message: String,

    /// Severity label (case-insensitive). Missing means "error".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Line/column location, if the tool reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LineLocation>,

    /// Byte-offset span, if the tool reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: None,
            location: None,
            span: None,
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    #[must_use]
    pub fn at_line(mut self, line: u64, column: u64) -> Self {
        self.location = Some(LineLocation {
            line: Some(line),
            column: Some(column),
        });
        self
    }

    #[must_use]
    pub fn with_span(mut self, start: u64, end: Option<u64>) -> Self {
        self.span = Some(Span {
            start: Some(start),
            end,
        });
        self
    }

    /// True when the severity is "error" (case-insensitive) or absent.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity
            .as_deref()
            .map_or(true, |s| s.eq_ignore_ascii_case(ERROR_SEVERITY))
    }
}

/// Line/column location as reported by line-oriented tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineLocation {
    #[serde(default)]
    pub line: Option<u64>,
    #[serde(default)]
    pub column: Option<u64>,
}

/// Byte-offset span as reported by truss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

/// Comparable `(file, line, column)` triple derived from a [`Diagnostic`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalLocation {
    pub file: String,
    pub line: u64,
    pub column: u64,
}

impl CanonicalLocation {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u64, column: u64) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Same file and lines at most `tolerance` apart. Columns are ignored.
    #[must_use]
    pub fn is_near(&self, other: &Self, tolerance: u64) -> bool {
        self.file == other.file && self.line.abs_diff(other.line) <= tolerance
    }
}

impl std::fmt::Display for CanonicalLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
