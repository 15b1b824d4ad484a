//! Engine error types.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during an analysis pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Core error: {0}")]
    Core(#[from] agora_core::error::AgoraError),

    #[error("Clustering error: {0}")]
    Cluster(#[from] agora_cluster::ClusterError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
