//! k-means with k-means++ initialization.

use crate::error::ClusterError;
use crate::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default iteration budget for one k-means run.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Output of a single clustering pass.
///
/// Assignments and centroids are snapshot outputs — they are discarded
/// and recomputed on the next analysis pass, never treated as durable
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    /// Cluster index for each input point.
    pub assignments: Vec<usize>,
    /// One coordinate vector per cluster.
    pub centroids: Vec<Vec<f64>>,
    /// Effective cluster count (reduced when there are fewer points).
    pub k: usize,
    /// Sum of squared distances from each point to its final centroid.
    pub inertia: f64,
}

impl ClusterResult {
    /// Cluster sizes, indexed by cluster. Sums to the number of points.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k];
        for &a in &self.assignments {
            sizes[a] += 1;
        }
        sizes
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

fn check_dimensions(points: &[Vec<f64>]) -> Result<()> {
    if let Some(first) = points.first() {
        let expected = first.len();
        for (index, p) in points.iter().enumerate() {
            if p.len() != expected {
                return Err(ClusterError::DimensionMismatch {
                    index,
                    expected,
                    got: p.len(),
                });
            }
        }
    }
    Ok(())
}

/// k-means++ initialization.
///
/// The first centroid is drawn uniformly; each subsequent centroid is
/// drawn with probability proportional to its squared distance to the
/// nearest already-chosen centroid, via a cumulative-weight draw over a
/// single uniform sample. Falls back to a uniform pick when all
/// remaining distances are zero.
fn init_centroids<R: Rng + ?Sized>(points: &[Vec<f64>], k: usize, rng: &mut R) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..n)].clone());

    for c in 1..k {
        let distances: Vec<f64> = points
            .iter()
            .map(|p| {
                centroids
                    .iter()
                    .map(|centroid| euclidean(p, centroid))
                    .fold(f64::INFINITY, f64::min)
                    .powi(2)
            })
            .collect();

        let total: f64 = distances.iter().sum();
        let mut r = rng.gen::<f64>() * total;
        for (i, d) in distances.iter().enumerate() {
            r -= d;
            if r <= 0.0 {
                centroids.push(points[i].clone());
                break;
            }
        }
        if centroids.len() <= c {
            centroids.push(points[rng.gen_range(0..n)].clone());
        }
    }

    centroids
}

/// Run k-means with the default iteration budget.
pub fn kmeans<R: Rng + ?Sized>(points: &[Vec<f64>], k: usize, rng: &mut R) -> Result<ClusterResult> {
    kmeans_with_iterations(points, k, DEFAULT_MAX_ITERATIONS, rng)
}

/// Run k-means with an explicit iteration budget.
///
/// Degenerate cases:
/// - empty point set → empty assignments and centroids, `k` unchanged,
///   inertia 0
/// - `points.len() <= k` → one cluster per point: identity assignments,
///   each point its own centroid, `k` reduced to the point count,
///   inertia 0, no iteration runs
///
/// Otherwise: k-means++ initialization, then up to `max_iterations`
/// rounds of nearest-centroid assignment (ties broken toward the lower
/// cluster index) and component-wise mean update (a centroid whose
/// cluster empties keeps its previous position — a cluster never
/// disappears mid-run), stopping early once assignments stabilize.
pub fn kmeans_with_iterations<R: Rng + ?Sized>(
    points: &[Vec<f64>],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> Result<ClusterResult> {
    if k == 0 {
        return Err(ClusterError::InvalidK { k });
    }
    if max_iterations == 0 {
        return Err(ClusterError::InvalidIterations);
    }
    check_dimensions(points)?;

    if points.is_empty() {
        return Ok(ClusterResult {
            assignments: Vec::new(),
            centroids: Vec::new(),
            k,
            inertia: 0.0,
        });
    }
    if points.len() <= k {
        return Ok(ClusterResult {
            assignments: (0..points.len()).collect(),
            centroids: points.to_vec(),
            k: points.len(),
            inertia: 0.0,
        });
    }

    let dim = points[0].len();
    let mut centroids = init_centroids(points, k, rng);
    let mut assignments = vec![0usize; points.len()];

    for _ in 0..max_iterations {
        // Assignment step; strict < keeps ties at the lower index.
        let new_assignments: Vec<usize> = points
            .iter()
            .map(|p| {
                let mut min_dist = f64::INFINITY;
                let mut min_idx = 0;
                for (c, centroid) in centroids.iter().enumerate() {
                    let d = euclidean(p, centroid);
                    if d < min_dist {
                        min_dist = d;
                        min_idx = c;
                    }
                }
                min_idx
            })
            .collect();

        if new_assignments == assignments {
            break;
        }
        assignments = new_assignments;

        // Update step
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let mut sum = vec![0.0; dim];
            let mut count = 0usize;
            for (p, &a) in points.iter().zip(assignments.iter()) {
                if a == c {
                    for (s, v) in sum.iter_mut().zip(p.iter()) {
                        *s += v;
                    }
                    count += 1;
                }
            }
            if count > 0 {
                for s in sum.iter_mut() {
                    *s /= count as f64;
                }
                *centroid = sum;
            }
        }
    }

    let inertia = points
        .iter()
        .zip(assignments.iter())
        .map(|(p, &a)| euclidean(p, &centroids[a]).powi(2))
        .sum();

    Ok(ClusterResult {
        assignments,
        centroids,
        k,
        inertia,
    })
}
