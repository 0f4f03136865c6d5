use similar::{Algorithm, DiffOp, TextDiff};

use crate::utils::validation::count_to_f64;

/// Sequence similarity of two normalized messages, in `[0.0, 1.0]`.
///
/// Computed over characters as `2 * M / (len(a) + len(b))`, where `M` is the
/// number of characters in the longest common subsequence found by the diff.
/// Identical strings (including two empty strings) score `1.0`; strings with
/// no characters in common score `0.0`.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(a, b);
    let matched: usize = diff
        .ops()
        .iter()
        .map(|op| match op {
            DiffOp::Equal { len, .. } => *len,
            _ => 0,
        })
        .sum();

    // Kept in f64 so exact ratios such as 14/20 compare equal to a 0.7 threshold
    let total = a.chars().count() + b.chars().count();
    2.0 * count_to_f64(matched) / count_to_f64(total)
}

/// True when `score` clears `threshold`
#[inline]
#[must_use]
pub fn passes_threshold(score: f64, threshold: f64) -> bool {
    score >= threshold
}
