//! Clustering error types.

use thiserror::Error;

/// Errors raised for invalid caller-supplied clustering parameters.
///
/// Degenerate inputs (empty point sets, more clusters than points) are
/// not errors — they produce documented neutral results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    #[error("Invalid cluster count: {k} (must be at least 1)")]
    InvalidK { k: usize },

    #[error("Invalid iteration budget: 0 (must be at least 1)")]
    InvalidIterations,

    #[error("Invalid trial count: 0 (must be at least 1)")]
    InvalidTrials,

    #[error("Dimension mismatch: point {index} has {got} dimensions, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },
}
