//! Shared types used across all Agora crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an opinion in a discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpinionId(pub Uuid);

impl OpinionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic ID for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u64_pair(seed, seed))
    }
}

impl Default for OpinionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscussionId(pub Uuid);

impl DiscussionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic ID for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u64_pair(seed, seed))
    }
}

impl Default for DiscussionId {
    fn default() -> Self {
        Self::new()
    }
}

/// A point in time, stored as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

const MILLIS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;

impl Timestamp {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Hours elapsed from `self` to `later`, clamped at zero.
    ///
    /// Clamping means a stale clock can never make a decayed signal grow:
    /// pheromone decay over a non-positive interval is a no-op.
    pub fn hours_until(&self, later: Timestamp) -> f64 {
        let delta = (later.0 - self.0) as f64 / MILLIS_PER_HOUR;
        delta.max(0.0)
    }

    /// A timestamp `hours` later than this one.
    pub fn plus_hours(&self, hours: f64) -> Timestamp {
        Timestamp(self.0 + (hours * MILLIS_PER_HOUR) as i64)
    }
}

/// The lifecycle phase of a discussion.
///
/// Transitions are strictly monotone — a discussion only ever moves
/// forward through `Open → Deliberation → Convergence → Closed`, and
/// `Closed` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Open,
    Deliberation,
    Convergence,
    Closed,
}

impl Phase {
    /// Whether this phase accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Closed)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::Open => "OPEN",
            Phase::Deliberation => "DELIBERATION",
            Phase::Convergence => "CONVERGENCE",
            Phase::Closed => "CLOSED",
        };
        write!(f, "{}", s)
    }
}

/// Per-opinion pheromone signal (stigmergy).
///
/// Intensity decays exponentially with time; support events reinforce it.
/// `quality` and `decay_rate` are fixed at the opinion's creation and
/// never change. Reinforcement replaces the whole value rather than
/// mutating in place — see [`PheromoneState::reinforce`](crate::pheromone).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PheromoneState {
    /// Current deposited intensity (≥ 0), as of `last_updated`.
    pub intensity: f64,
    /// How strongly a support event reinforces this opinion (0-1).
    pub quality: f64,
    /// Exponential decay rate per hour (> 0).
    pub decay_rate: f64,
    /// When `intensity` was last materialized.
    pub last_updated: Timestamp,
}

/// Aggregate view of a pheromone field at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PheromoneField {
    pub total: f64,
    pub avg: f64,
    pub max: f64,
}

/// Canonical stored attributes an opinion's fitness is projected from.
///
/// Fitness itself is never persisted — it is recomputed from these inputs
/// on every analysis pass, so display and storage can never drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessInputs {
    pub support_count: u32,
    /// Derived argument-strength scalar from the external extractor (0-1).
    pub argument_strength: f64,
    pub rebuttal_count: u32,
    pub age_hours: f64,
    pub pheromone_intensity: f64,
}

/// Fitness-landscape statistics over one analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandscapeStats {
    pub mean: f64,
    /// Population variance (divide by n).
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub gini_coefficient: f64,
}

/// Snapshot of the aggregate signals that drive a phase decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuorumState {
    pub phase: Phase,
    pub total_opinions: usize,
    pub total_supports: usize,
    /// Sizes of each cluster from the latest clustering pass.
    pub cluster_sizes: Vec<usize>,
    pub avg_pheromone: f64,
    /// Fraction of opinions in the largest cluster.
    pub convergence_score: f64,
}
