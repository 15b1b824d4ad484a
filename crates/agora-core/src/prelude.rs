//! Prelude for convenient imports.

pub use crate::error::{AgoraError, Result};
pub use crate::fitness::{calculate_fitness, landscape_stats, rank_by_fitness};
pub use crate::pheromone::aggregate_field;
pub use crate::quorum::{
    convergence_score, determine_phase, shannon_diversity, shannon_evenness,
    DEFAULT_CONVERGENCE_THRESHOLD,
};
pub use crate::types::{
    DiscussionId, FitnessInputs, LandscapeStats, OpinionId, Phase, PheromoneField,
    PheromoneState, QuorumState, Timestamp,
};
