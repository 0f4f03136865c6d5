//! Centralized validation and helper functions.

/// Maximum length of a tool name (it names a directory under the results root)
pub const MAX_TOOL_NAME_LENGTH: usize = 255;

/// Number of characters of a malformed result file echoed in warnings
pub const PREVIEW_CHARS: usize = 200;

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Tool name too long: exceeds {MAX_TOOL_NAME_LENGTH} characters")]
    ToolNameTooLong,
    #[error("contains path traversal or invalid characters")]
    InvalidToolName,
    #[error("Empty tool name provided")]
    EmptyToolName,
    #[error("{0} is outside the range 0.0..=1.0")]
    ThresholdOutOfRange(f64),
}

/// Convert a count to f64 for ratio calculations.
///
/// Diagnostic and file counts are far below the f64 mantissa limit, so the
/// precision loss clippy warns about cannot occur in practice.
#[inline]
#[must_use]
pub fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// `numerator / denominator`, or `when_empty` if the denominator is zero.
///
/// # Examples
///
/// ```
/// use truss_compare::utils::validation::ratio_or;
///
/// assert_eq!(ratio_or(1, 4, 1.0), 0.25);
/// assert_eq!(ratio_or(0, 0, 1.0), 1.0);
/// ```
#[must_use]
pub fn ratio_or(numerator: usize, denominator: usize, when_empty: f64) -> f64 {
    if denominator == 0 {
        when_empty
    } else {
        count_to_f64(numerator) / count_to_f64(denominator)
    }
}

/// Validate a tool name.
///
/// Tool names are joined onto the results directory, so anything that could
/// escape it is rejected.
///
/// # Errors
///
/// Returns `ValidationError::EmptyToolName` if the name is blank,
/// `ValidationError::ToolNameTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidToolName` if it contains separators, `..`,
/// or control characters.
pub fn validate_tool_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyToolName);
    }

    if name.len() > MAX_TOOL_NAME_LENGTH {
        return Err(ValidationError::ToolNameTooLong);
    }

    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(ValidationError::InvalidToolName);
    }

    if name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidToolName);
    }

    Ok(())
}

/// Validate a similarity threshold
///
/// # Errors
///
/// Returns `ValidationError::ThresholdOutOfRange` for NaN or values outside `[0, 1]`.
pub fn validate_threshold(threshold: f64) -> Result<(), ValidationError> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(ValidationError::ThresholdOutOfRange(threshold))
    }
}

/// First `PREVIEW_CHARS` characters of `content`, for warnings
#[must_use]
pub fn preview(content: &str) -> &str {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}
