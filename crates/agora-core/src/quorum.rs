//! Quorum sensing — the discussion phase state machine.
//!
//! Bacteria undergo coordinated behavioral changes once population
//! density crosses a threshold. A discussion works the same way: when
//! aggregate signals (opinion volume, cluster-size distribution,
//! pheromone level) cross their thresholds, the discussion phase advances
//! — OPEN → DELIBERATION → CONVERGENCE → CLOSED.
//!
//! The transition is discrete, monotone, and advances at most one stage
//! per call. CLOSED is absorbing.

use crate::error::{AgoraError, Result};
use crate::types::{Phase, QuorumState};

/// Platform-default fraction of opinions the largest cluster must hold
/// before a discussion counts as "converged".
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.6;

/// Opinions required before a discussion can leave OPEN.
const MIN_OPINIONS_FOR_DELIBERATION: usize = 10;

/// Shannon diversity index `H = -Σ pᵢ·ln(pᵢ)` over nonzero cluster sizes.
///
/// Returns 0 when the total size is 0.
pub fn shannon_diversity(cluster_sizes: &[usize]) -> f64 {
    let total: usize = cluster_sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let mut h = 0.0;
    for &size in cluster_sizes {
        if size > 0 {
            let p = size as f64 / total as f64;
            h -= p * p.ln();
        }
    }
    h
}

/// Normalized Shannon evenness `H / ln(k)` over the k nonzero clusters.
///
/// With at most one nonzero cluster there is no unevenness to measure,
/// so the result is defined as 1 (maximally even).
pub fn shannon_evenness(cluster_sizes: &[usize]) -> f64 {
    let k = cluster_sizes.iter().filter(|&&s| s > 0).count();
    if k <= 1 {
        return 1.0;
    }
    shannon_diversity(cluster_sizes) / (k as f64).ln()
}

/// Fraction of opinions in the largest cluster; 0 when the total is 0.
pub fn convergence_score(cluster_sizes: &[usize]) -> f64 {
    let total: usize = cluster_sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let max = cluster_sizes.iter().max().copied().unwrap_or(0);
    max as f64 / total as f64
}

/// Determine the next phase from the current quorum snapshot.
///
/// Pure function of `state` and `threshold`; advances at most one stage,
/// never skips, never reverses. Transition guards:
///
/// - OPEN → DELIBERATION: ≥ 10 opinions and supports ≥ half the opinions
/// - DELIBERATION → CONVERGENCE: convergence score ≥ `threshold`, cluster
///   evenness < 0.7, and average pheromone > 1.0
/// - CONVERGENCE → CLOSED: convergence score ≥ 1.2 · `threshold` and
///   average pheromone > 2.0
/// - CLOSED: absorbing
///
/// `threshold` must be finite and positive.
pub fn determine_phase(state: &QuorumState, threshold: f64) -> Result<Phase> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(AgoraError::invalid_parameter(
            "threshold",
            threshold,
            "must be a finite positive number",
        ));
    }

    let next = match state.phase {
        Phase::Open => {
            if state.total_opinions >= MIN_OPINIONS_FOR_DELIBERATION
                && state.total_supports as f64 >= state.total_opinions as f64 * 0.5
            {
                Phase::Deliberation
            } else {
                Phase::Open
            }
        }
        Phase::Deliberation => {
            let evenness = shannon_evenness(&state.cluster_sizes);
            if state.convergence_score >= threshold
                && evenness < 0.7
                && state.avg_pheromone > 1.0
            {
                Phase::Convergence
            } else {
                Phase::Deliberation
            }
        }
        Phase::Convergence => {
            if state.convergence_score >= threshold * 1.2 && state.avg_pheromone > 2.0 {
                Phase::Closed
            } else {
                Phase::Convergence
            }
        }
        Phase::Closed => Phase::Closed,
    };

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quorum(
        phase: Phase,
        total_opinions: usize,
        total_supports: usize,
        cluster_sizes: Vec<usize>,
        avg_pheromone: f64,
    ) -> QuorumState {
        let convergence = convergence_score(&cluster_sizes);
        QuorumState {
            phase,
            total_opinions,
            total_supports,
            cluster_sizes,
            avg_pheromone,
            convergence_score: convergence,
        }
    }

    #[test]
    fn diversity_of_single_cluster_is_zero() {
        assert_eq!(shannon_diversity(&[10]), 0.0);
    }

    #[test]
    fn diversity_of_two_equal_clusters_is_ln_two() {
        assert!((shannon_diversity(&[10, 10]) - 2.0f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn diversity_is_permutation_invariant() {
        let a = shannon_diversity(&[3, 7, 12, 1]);
        let b = shannon_diversity(&[12, 1, 3, 7]);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn diversity_of_empty_field_is_zero() {
        assert_eq!(shannon_diversity(&[]), 0.0);
        assert_eq!(shannon_diversity(&[0, 0]), 0.0);
    }

    #[test]
    fn evenness_is_one_for_at_most_one_group() {
        assert_eq!(shannon_evenness(&[]), 1.0);
        assert_eq!(shannon_evenness(&[42]), 1.0);
        assert_eq!(shannon_evenness(&[42, 0, 0]), 1.0);
    }

    #[test]
    fn evenness_of_equal_clusters_is_one() {
        assert!((shannon_evenness(&[5, 5, 5]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn evenness_drops_with_a_dominant_cluster() {
        assert!(shannon_evenness(&[90, 5, 5]) < 0.7);
    }

    #[test]
    fn convergence_score_cases() {
        assert!((convergence_score(&[6, 3, 1]) - 0.6).abs() < 1e-9);
        assert_eq!(convergence_score(&[]), 0.0);
        assert_eq!(convergence_score(&[17]), 1.0);
    }

    #[test]
    fn open_advances_with_enough_opinions_and_supports() {
        let state = quorum(Phase::Open, 10, 5, vec![], 0.0);
        assert_eq!(determine_phase(&state, 0.6).unwrap(), Phase::Deliberation);
    }

    #[test]
    fn open_stays_without_quorum() {
        let few_opinions = quorum(Phase::Open, 9, 9, vec![], 0.0);
        assert_eq!(determine_phase(&few_opinions, 0.6).unwrap(), Phase::Open);

        let few_supports = quorum(Phase::Open, 20, 9, vec![], 0.0);
        assert_eq!(determine_phase(&few_supports, 0.6).unwrap(), Phase::Open);
    }

    #[test]
    fn deliberation_advances_on_dominant_cluster() {
        // 12/16 in one cluster: convergence 0.75, evenness well below 0.7
        let state = quorum(Phase::Deliberation, 16, 20, vec![12, 2, 2], 1.5);
        assert_eq!(determine_phase(&state, 0.6).unwrap(), Phase::Convergence);
    }

    #[test]
    fn deliberation_stays_when_pheromone_is_weak() {
        let state = quorum(Phase::Deliberation, 16, 20, vec![12, 2, 2], 0.9);
        assert_eq!(determine_phase(&state, 0.6).unwrap(), Phase::Deliberation);
    }

    #[test]
    fn deliberation_stays_when_clusters_are_even() {
        let state = quorum(Phase::Deliberation, 20, 20, vec![5, 5, 5, 5], 2.0);
        assert_eq!(determine_phase(&state, 0.6).unwrap(), Phase::Deliberation);
    }

    #[test]
    fn convergence_closes_on_strong_convergence() {
        // convergence 0.75 ≥ 0.72 = 1.2·0.6, pheromone above 2.0
        let state = quorum(Phase::Convergence, 16, 30, vec![12, 2, 2], 2.5);
        assert_eq!(determine_phase(&state, 0.6).unwrap(), Phase::Closed);
    }

    #[test]
    fn convergence_stays_below_raised_threshold() {
        // convergence 0.6 < 0.72
        let state = quorum(Phase::Convergence, 10, 30, vec![6, 3, 1], 2.5);
        assert_eq!(determine_phase(&state, 0.6).unwrap(), Phase::Convergence);
    }

    #[test]
    fn closed_is_absorbing() {
        let state = quorum(Phase::Closed, 1000, 1000, vec![1000], 100.0);
        assert_eq!(determine_phase(&state, 0.6).unwrap(), Phase::Closed);

        let empty = quorum(Phase::Closed, 0, 0, vec![], 0.0);
        assert_eq!(determine_phase(&empty, 0.6).unwrap(), Phase::Closed);
    }

    #[test]
    fn never_skips_a_stage() {
        // Signals strong enough for any transition still move OPEN only
        // one stage forward.
        let state = quorum(Phase::Open, 100, 100, vec![95, 3, 2], 10.0);
        assert_eq!(determine_phase(&state, 0.6).unwrap(), Phase::Deliberation);
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let state = quorum(Phase::Open, 0, 0, vec![], 0.0);
        assert!(determine_phase(&state, 0.0).is_err());
        assert!(determine_phase(&state, -0.6).is_err());
        assert!(determine_phase(&state, f64::NAN).is_err());
    }
}
