use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::diagnostic::{CanonicalLocation, Diagnostic};
use crate::matching::location::normalize_location;
use crate::matching::message::normalize_message;
use crate::matching::scoring::{passes_threshold, similarity};

/// Default minimum message similarity for two diagnostics to match
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Default maximum line distance for two diagnostics to be compared at all
pub const DEFAULT_LINE_TOLERANCE: u64 = 2;

/// Configuration for the matching engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum similarity (inclusive) for an eligible pair to match
    pub similarity_threshold: f64,
    /// Maximum line difference (inclusive) for the location gate
    pub line_tolerance: u64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            line_tolerance: DEFAULT_LINE_TOLERANCE,
        }
    }
}

/// A diagnostic from side A paired with one from side B
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticMatch<'a> {
    pub a: &'a Diagnostic,
    pub b: &'a Diagnostic,
    /// Message similarity that produced the pairing
    pub similarity: f64,
}

/// Three-way partition of two diagnostic lists.
///
/// Each collection keeps the relative order of its source list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome<'a> {
    pub common: Vec<DiagnosticMatch<'a>>,
    pub unique_to_a: Vec<&'a Diagnostic>,
    pub unique_to_b: Vec<&'a Diagnostic>,
}

/// A side-B diagnostic, normalized once per call
struct Candidate<'a> {
    diagnostic: &'a Diagnostic,
    location: CanonicalLocation,
    message: String,
    claimed: bool,
}

/// Pairs up diagnostics from two tools for the same file
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    /// Create a new matching engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new matching engine with custom configuration
    #[must_use]
    pub fn with_config(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Match `list_a` against `list_b` for one file.
    ///
    /// Greedy and one-to-one. Each diagnostic in `list_a`, in order, claims the
    /// unclaimed diagnostic in `list_b` that passes the location gate (same
    /// file, lines within `line_tolerance`) and has the highest message
    /// similarity, provided that similarity reaches the threshold. Ties go to
    /// the earliest candidate in `list_b`, and a candidate with no characters in
    /// common (score `0.0`) is never picked. A claimed diagnostic is never
    /// offered again, so an earlier A entry can take the candidate a later one
    /// would have preferred.
    #[must_use]
    pub fn match_diagnostics<'a>(
        &self,
        list_a: &'a [Diagnostic],
        list_b: &'a [Diagnostic],
        file_path: &str,
    ) -> MatchOutcome<'a> {
        let mut pool: Vec<Candidate<'a>> = list_b
            .iter()
            .map(|diagnostic| Candidate {
                diagnostic,
                location: normalize_location(diagnostic, file_path),
                message: normalize_message(&diagnostic.message),
                claimed: false,
            })
            .collect();

        let mut outcome = MatchOutcome::default();

        for a in list_a {
            let location = normalize_location(a, file_path);
            let message = normalize_message(&a.message);

            let mut best: Option<usize> = None;
            let mut best_score = 0.0;
            for (idx, candidate) in pool.iter().enumerate() {
                if candidate.claimed
                    || !location.is_near(&candidate.location, self.config.line_tolerance)
                {
                    continue;
                }

                let score = similarity(&message, &candidate.message);
                if score > best_score {
                    best = Some(idx);
                    best_score = score;
                }
            }

            match best {
                Some(idx) if passes_threshold(best_score, self.config.similarity_threshold) => {
                    let candidate = &mut pool[idx];
                    candidate.claimed = true;
                    debug!(
                        location = %location,
                        similarity = best_score,
                        "Matched '{}' with '{}'",
                        a.message,
                        candidate.diagnostic.message
                    );
                    outcome.common.push(DiagnosticMatch {
                        a,
                        b: candidate.diagnostic,
                        similarity: best_score,
                    });
                }
                _ => outcome.unique_to_a.push(a),
            }
        }

        outcome.unique_to_b = pool
            .into_iter()
            .filter(|candidate| !candidate.claimed)
            .map(|candidate| candidate.diagnostic)
            .collect();

        outcome
    }
}
