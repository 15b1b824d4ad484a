//! External collaborator seams.
//!
//! Argument-structure extraction, cluster labeling, and gap detection
//! are opaque external capabilities (typically backed by a
//! text-understanding service). The engine consumes only flat summaries
//! from them — counts and scalars, never raw structure — and degrades to
//! neutral defaults when a collaborator is absent or fails. Failures are
//! never retried inside the engine and never fail the analysis pass.
//!
//! Collaborators are explicit constructor-injected values, not shared
//! global clients, so the engine and its consumers test with no live
//! external dependency.

use serde::{Deserialize, Serialize};

/// Neutral argument strength used when no extractor result is available.
pub const DEFAULT_ARGUMENT_STRENGTH: f64 = 0.5;

/// Flat summary of an opinion's extracted argument structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArgumentSummary {
    /// Derived argument-strength scalar (0-1).
    pub strength: f64,
    pub claim_count: u32,
    pub rebuttal_count: u32,
}

/// Extracts argument structure from raw opinion text.
pub trait ArgumentExtractor: Send + Sync {
    /// Summarize the argument structure of one opinion.
    ///
    /// `None` means the capability could not produce a result; the
    /// engine substitutes [`DEFAULT_ARGUMENT_STRENGTH`].
    fn extract(&self, text: &str) -> Option<ArgumentSummary>;
}

/// Produces a short descriptive label for a cluster from representative
/// member texts.
pub trait ClusterLabeler: Send + Sync {
    /// `None` leaves the cluster unlabeled.
    fn label(&self, representative_texts: &[&str]) -> Option<String>;
}

/// An argumentation gap flagged by the external gap detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub description: String,
    /// Indices of the opinions the gap concerns.
    pub opinion_indices: Vec<usize>,
}

/// Detects argumentation gaps across a discussion.
///
/// Orthogonal to the scoring/clustering core; its output rides along in
/// the report untouched.
pub trait GapDetector: Send + Sync {
    fn detect(&self, texts: &[&str]) -> Vec<GapReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedExtractor(f64);

    impl ArgumentExtractor for FixedExtractor {
        fn extract(&self, _text: &str) -> Option<ArgumentSummary> {
            Some(ArgumentSummary {
                strength: self.0,
                claim_count: 1,
                rebuttal_count: 0,
            })
        }
    }

    struct FailingExtractor;

    impl ArgumentExtractor for FailingExtractor {
        fn extract(&self, _text: &str) -> Option<ArgumentSummary> {
            None
        }
    }

    #[test]
    fn extractors_are_object_safe() {
        let extractors: Vec<Box<dyn ArgumentExtractor>> =
            vec![Box::new(FixedExtractor(0.9)), Box::new(FailingExtractor)];
        assert_eq!(extractors[0].extract("x").unwrap().strength, 0.9);
        assert!(extractors[1].extract("x").is_none());
    }
}
