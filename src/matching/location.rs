use crate::core::diagnostic::{CanonicalLocation, Diagnostic};

/// Line assigned to span-based diagnostics and to diagnostics with no location
pub const FALLBACK_LINE: u64 = 1;

/// Map a diagnostic's location into a comparable `(file, line, column)` triple.
///
/// - `location: {line, column}` is used directly; missing fields become `0`.
/// - `span: {start, ..}` becomes line 1, column `start`.
/// - Neither present: line 1, column 0.
///
/// Span offsets are not resolved to real line numbers, so every span-based
/// diagnostic lands on line 1. Against a line-oriented tool this means only
/// findings on lines 1-3 can pass the location gate. This is a known
/// limitation and is kept as-is.
#[must_use]
pub fn normalize_location(diagnostic: &Diagnostic, file_path: &str) -> CanonicalLocation {
    if let Some(location) = &diagnostic.location {
        return CanonicalLocation::new(
            file_path,
            location.line.unwrap_or(0),
            location.column.unwrap_or(0),
        );
    }

    if let Some(span) = &diagnostic.span {
        return CanonicalLocation::new(file_path, FALLBACK_LINE, span.start.unwrap_or(0));
    }

    CanonicalLocation::new(file_path, FALLBACK_LINE, 0)
}
