//! # Agora Cluster
//!
//! k-means clustering for opinion embeddings:
//!
//! - k-means++ initialization (probabilistically spread initial centroids)
//! - Lloyd iteration with early stop on stable assignments
//! - Elbow-method selection of the cluster count k
//! - Parallel multi-trial clustering keeping the lowest-inertia result
//!
//! Randomness is injected: every randomized entry point takes a
//! [`rand::Rng`], so clustering runs are reproducible under test with a
//! seeded generator while keeping the same statistical behavior in
//! production.
//!
//! ## Usage
//!
//! ```rust
//! use agora_cluster::kmeans;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let points = vec![vec![0.0, 0.0], vec![0.1, 0.0], vec![9.0, 9.0], vec![9.1, 9.0]];
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let result = kmeans(&points, 2, &mut rng).unwrap();
//! assert_eq!(result.assignments.len(), 4);
//! ```

mod elbow;
mod error;
mod kmeans;
mod trials;

pub use elbow::{auto_kmeans, find_optimal_k, DEFAULT_MAX_K};
pub use error::ClusterError;
pub use kmeans::{kmeans, kmeans_with_iterations, ClusterResult, DEFAULT_MAX_ITERATIONS};
pub use trials::best_of_trials;

/// Result type for clustering operations.
pub type Result<T> = std::result::Result<T, ClusterError>;
