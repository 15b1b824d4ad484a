//! Elbow-method selection of the cluster count k.

use crate::kmeans::kmeans;
use crate::{ClusterResult, Result};
use rand::Rng;

/// Default upper bound on the cluster count considered by
/// [`find_optimal_k`].
pub const DEFAULT_MAX_K: usize = 10;

/// Choose k by locating the point of maximum curvature in the
/// inertia-versus-k curve.
///
/// Returns 1 when there are 2 or fewer points. Otherwise runs k-means for
/// every k from 1 to `min(max_k, n/2)` and returns the k maximizing the
/// discrete second derivative `|inertia[k-1] − 2·inertia[k] +
/// inertia[k+1]|` over interior points. Near-ties favor the smaller k
/// (the scan replaces the best candidate only on strictly greater
/// curvature), so the choice is deterministic on every platform. Fewer
/// than three evaluated k values yield 1 — there is no curvature signal.
pub fn find_optimal_k<R: Rng + ?Sized>(
    points: &[Vec<f64>],
    max_k: usize,
    rng: &mut R,
) -> Result<usize> {
    if points.len() <= 2 {
        return Ok(1);
    }
    let effective_max = max_k.min(points.len() / 2);

    let mut inertias = Vec::with_capacity(effective_max);
    for k in 1..=effective_max {
        inertias.push(kmeans(points, k, rng)?.inertia);
    }

    if inertias.len() <= 2 {
        return Ok(1);
    }

    let mut best_k = 1;
    let mut max_curvature = 0.0;
    for i in 1..inertias.len() - 1 {
        let curvature = (inertias[i - 1] - 2.0 * inertias[i] + inertias[i + 1]).abs();
        if curvature > max_curvature {
            max_curvature = curvature;
            best_k = i + 1;
        }
    }

    Ok(best_k)
}

/// Run k-means with automatic k determination.
pub fn auto_kmeans<R: Rng + ?Sized>(points: &[Vec<f64>], rng: &mut R) -> Result<ClusterResult> {
    let k = find_optimal_k(points, DEFAULT_MAX_K, rng)?;
    kmeans(points, k, rng)
}
