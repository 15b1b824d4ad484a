//! In-memory discussion snapshots — the unit of work crossing the
//! persistence boundary.
//!
//! The host service materializes a snapshot from its own storage, hands
//! it to the engine, and persists whatever parts of the report it cares
//! about. The engine neither reads nor writes durable storage.

use agora_core::types::{DiscussionId, OpinionId, Phase, PheromoneState, Timestamp};
use serde::{Deserialize, Serialize};

/// One opinion as the engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionRecord {
    pub id: OpinionId,
    /// Raw opinion text; used only for embedding, never interpreted.
    pub body: String,
    pub support_count: u32,
    pub rebuttal_count: u32,
    /// Derived argument-strength scalar (0-1) from the external
    /// extractor, when one ran. `None` falls back to the neutral default.
    pub argument_strength: Option<f64>,
    pub created_at: Timestamp,
    pub pheromone: PheromoneState,
}

/// A full discussion snapshot at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionSnapshot {
    pub discussion_id: DiscussionId,
    pub phase: Phase,
    pub opinions: Vec<OpinionRecord>,
    /// When the snapshot was taken; the "now" for decay and age math.
    pub taken_at: Timestamp,
}

impl DiscussionSnapshot {
    /// Total support events across all opinions.
    pub fn total_supports(&self) -> usize {
        self.opinions.iter().map(|o| o.support_count as usize).sum()
    }

    /// Opinion age in hours at the snapshot instant (clamped at zero).
    pub fn age_hours(&self, opinion: &OpinionRecord) -> f64 {
        opinion.created_at.hours_until(self.taken_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(support: u32, created_ms: i64) -> OpinionRecord {
        OpinionRecord {
            id: OpinionId::from_seed(support as u64),
            body: "test".to_string(),
            support_count: support,
            rebuttal_count: 0,
            argument_strength: None,
            created_at: Timestamp::from_millis(created_ms),
            pheromone: PheromoneState::new(0.0, 0.5, 0.1, Timestamp::from_millis(created_ms))
                .unwrap(),
        }
    }

    #[test]
    fn total_supports_sums_over_opinions() {
        let snapshot = DiscussionSnapshot {
            discussion_id: DiscussionId::from_seed(1),
            phase: Phase::Open,
            opinions: vec![record(2, 0), record(5, 0), record(0, 0)],
            taken_at: Timestamp::from_millis(0),
        };
        assert_eq!(snapshot.total_supports(), 7);
    }

    #[test]
    fn age_is_measured_against_snapshot_instant() {
        let snapshot = DiscussionSnapshot {
            discussion_id: DiscussionId::from_seed(1),
            phase: Phase::Open,
            opinions: vec![record(1, 0)],
            taken_at: Timestamp::from_millis(0).plus_hours(36.0),
        };
        assert!((snapshot.age_hours(&snapshot.opinions[0]) - 36.0).abs() < 1e-9);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = DiscussionSnapshot {
            discussion_id: DiscussionId::from_seed(9),
            phase: Phase::Deliberation,
            opinions: vec![record(3, 1000)],
            taken_at: Timestamp::from_millis(5000),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DiscussionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
