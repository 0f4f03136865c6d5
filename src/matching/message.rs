use regex::Regex;
use std::sync::OnceLock;

/// Replacement for YAML file paths embedded in messages
pub const FILE_PLACEHOLDER: &str = "<file>";

fn yaml_path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        #[allow(clippy::expect_used)] // constant pattern
        Regex::new(r"[a-zA-Z0-9_\-/]+\.ya?ml").expect("valid YAML path pattern")
    })
}

/// Fold a message into a comparable form.
///
/// Lowercases, collapses whitespace runs to single spaces, trims, and replaces
/// YAML file paths (`foo/bar.yml`, `ci.yaml`) with [`FILE_PLACEHOLDER`] so that
/// messages differing only in the referenced file compare equal.
#[must_use]
pub fn normalize_message(message: &str) -> String {
    let folded = message
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    yaml_path_pattern()
        .replace_all(&folded, FILE_PLACEHOLDER)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_whitespace() {
        assert_eq!(
            normalize_message("  Missing   FIELD\t'name'\n"),
            "missing field 'name'"
        );
    }

    #[test]
    fn test_yaml_paths_replaced() {
        assert_eq!(
            normalize_message("error in .github/workflows/CI.yml at key"),
            "error in .<file> at key"
        );
        assert_eq!(
            normalize_message("cannot load other.yaml"),
            "cannot load <file>"
        );
    }

    #[test]
    fn test_messages_differing_only_in_path_are_equal() {
        assert_eq!(
            normalize_message("invalid job in workflows/build.yml"),
            normalize_message("Invalid job in workflows/release.yml")
        );
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(normalize_message(""), "");
        assert_eq!(normalize_message("   "), "");
    }
}
