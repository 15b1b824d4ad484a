//! Parallel multi-trial clustering.
//!
//! k-means is sensitive to initialization; independent restarts with
//! different seeds are embarrassingly parallel. `best_of_trials` runs
//! seeded trials on scoped threads and keeps the lowest-inertia result.
//! This is a resource optimization only — a single trial is already
//! correct.

use crate::kmeans::kmeans;
use crate::{ClusterError, ClusterResult, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::thread;

/// Run `trials` independent k-means trials and keep the lowest-inertia
/// result.
///
/// Trial i uses a `ChaCha8Rng` seeded with `seed + i`, so the outcome is
/// deterministic for a given `(seed, trials)` pair. Inertia ties keep the
/// lowest trial index.
pub fn best_of_trials(
    points: &[Vec<f64>],
    k: usize,
    trials: usize,
    seed: u64,
) -> Result<ClusterResult> {
    if trials == 0 {
        return Err(ClusterError::InvalidTrials);
    }
    if trials == 1 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        return kmeans(points, k, &mut rng);
    }

    let results: Vec<Result<ClusterResult>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..trials)
            .map(|trial| {
                scope.spawn(move || {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed + trial as u64);
                    kmeans(points, k, &mut rng)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut best: Option<ClusterResult> = None;
    for result in results {
        let result = result?;
        match &best {
            Some(current) if result.inertia >= current.inertia => {}
            _ => best = Some(result),
        }
    }

    // trials >= 2 guarantees at least one result.
    Ok(best.unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scattered_points() -> Vec<Vec<f64>> {
        (0..24)
            .map(|i| vec![(i % 6) as f64 * 2.0, (i / 6) as f64 * 5.0])
            .collect()
    }

    #[test]
    fn rejects_zero_trials() {
        assert_eq!(
            best_of_trials(&scattered_points(), 3, 0, 1),
            Err(ClusterError::InvalidTrials)
        );
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let points = scattered_points();
        let a = best_of_trials(&points, 3, 8, 17).unwrap();
        let b = best_of_trials(&points, 3, 8, 17).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn multi_trial_is_never_worse_than_its_own_trials() {
        let points = scattered_points();
        let best = best_of_trials(&points, 4, 8, 100).unwrap();
        for trial in 0..8u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(100 + trial);
            let single = kmeans(&points, 4, &mut rng).unwrap();
            assert!(best.inertia <= single.inertia + 1e-9);
        }
    }

    #[test]
    fn propagates_parameter_errors() {
        assert!(matches!(
            best_of_trials(&scattered_points(), 0, 4, 1),
            Err(ClusterError::InvalidK { k: 0 })
        ));
    }
}
