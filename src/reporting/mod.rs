//! Human-readable renderings of a [`ComparisonResult`](crate::comparison::ComparisonResult).
//!
//! Both renderers are pure functions from the aggregate document to a string;
//! writing files is left to the caller.
//!
//! | Renderer | File | Contents |
//! |----------|------|----------|
//! | [`render_markdown`] | `summary.md` | summary, coverage, tool table, first 20 files |
//! | [`render_html`] | `summary.html` | summary, coverage table, tool table |

pub mod html;
pub mod markdown;

pub use html::render_html;
pub use markdown::render_markdown;

/// Number of files listed individually in the Markdown breakdown
pub const MAX_FILES_IN_REPORT: usize = 20;

/// Format a ratio as a percentage with one decimal, e.g. `0.8312` -> `83.1%`
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(1.0), "100.0%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(0.8312), "83.1%");
    }
}
