//! Fitness landscape for the opinion ecosystem.
//!
//! `fitness = robustness · ln(1 + support) · persistence`, where
//! robustness is argument strength penalized by unaddressed rebuttals and
//! persistence is slow age decay boosted by pheromone. Zero support forces
//! a fitness of exactly 0 — an opinion nobody backs has no standing in the
//! landscape regardless of how well argued it is.
//!
//! Fitness is a derived value: it is recomputed from the canonical stored
//! attributes on every pass and never persisted as a second source of
//! truth.

use crate::error::{AgoraError, Result};
use crate::types::{FitnessInputs, LandscapeStats};

/// Rebuttal penalty slope in the robustness term.
const REBUTTAL_PENALTY: f64 = 0.3;
/// Age decay rate per hour in the persistence term.
const AGE_DECAY: f64 = 0.005;
/// Pheromone boost slope in the persistence term.
const PHEROMONE_BOOST: f64 = 0.5;

impl FitnessInputs {
    /// Create validated fitness inputs.
    ///
    /// Counts are unsigned by type; `argument_strength` must lie in 0-1
    /// and `age_hours` / `pheromone_intensity` must be finite and ≥ 0.
    pub fn new(
        support_count: u32,
        argument_strength: f64,
        rebuttal_count: u32,
        age_hours: f64,
        pheromone_intensity: f64,
    ) -> Result<Self> {
        if !argument_strength.is_finite() || !(0.0..=1.0).contains(&argument_strength) {
            return Err(AgoraError::out_of_range(
                "argument_strength",
                0.0,
                1.0,
                argument_strength,
            ));
        }
        if !age_hours.is_finite() || age_hours < 0.0 {
            return Err(AgoraError::invalid_parameter(
                "age_hours",
                age_hours,
                "must be a finite non-negative number",
            ));
        }
        if !pheromone_intensity.is_finite() || pheromone_intensity < 0.0 {
            return Err(AgoraError::invalid_parameter(
                "pheromone_intensity",
                pheromone_intensity,
                "must be a finite non-negative number",
            ));
        }
        Ok(Self {
            support_count,
            argument_strength,
            rebuttal_count,
            age_hours,
            pheromone_intensity,
        })
    }
}

/// Calculate an opinion's fitness score (≥ 0).
pub fn calculate_fitness(inputs: &FitnessInputs) -> f64 {
    let robustness =
        inputs.argument_strength / (1.0 + REBUTTAL_PENALTY * inputs.rebuttal_count as f64);
    let support_factor = (1.0 + inputs.support_count as f64).ln();
    let persistence = (-AGE_DECAY * inputs.age_hours).exp()
        * (1.0 + PHEROMONE_BOOST * inputs.pheromone_intensity);

    robustness * support_factor * persistence
}

/// Rank opinions by fitness, returning original indices in descending
/// score order.
///
/// Tie-break: the sort is stable, so equal scores keep their ascending
/// original-index order.
pub fn rank_by_fitness(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}

/// Compute landscape-wide statistics for a set of fitness scores.
///
/// Variance is the population variance (divide by n). The Gini
/// coefficient uses the direct mean-absolute-pairwise-difference formula
/// and is 0 for an empty landscape or a zero mean.
pub fn landscape_stats(scores: &[f64]) -> LandscapeStats {
    if scores.is_empty() {
        return LandscapeStats {
            mean: 0.0,
            variance: 0.0,
            min: 0.0,
            max: 0.0,
            gini_coefficient: 0.0,
        };
    }

    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let gini_coefficient = if mean > 0.0 {
        let mut pair_sum = 0.0;
        for &a in scores {
            for &b in scores {
                pair_sum += (a - b).abs();
            }
        }
        pair_sum / (2.0 * n * n * mean)
    } else {
        0.0
    };

    LandscapeStats {
        mean,
        variance,
        min,
        max,
        gini_coefficient,
    }
}
