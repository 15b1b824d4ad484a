//! # Agora Engine
//!
//! The analysis-pass orchestrator for the Agora opinion ecosystem.
//!
//! A host service hands the engine an in-memory [`DiscussionSnapshot`]
//! (opinion texts, support counts, pheromone states) and gets back an
//! [`EcosystemReport`]: embeddings → clustering → fitness landscape →
//! pheromone aggregate → quorum-sensing phase decision. The pass is a
//! stateless transformation of the snapshot; the engine owns no durable
//! state, performs no I/O, and never exposes partial results.
//!
//! External text-understanding capabilities (argument extraction,
//! cluster labeling, gap detection) are injected collaborators — the
//! engine degrades to neutral defaults when they are absent or failing.

pub mod analyzer;
pub mod collaborators;
pub mod error;
pub mod prelude;
pub mod snapshot;

pub use analyzer::{AnalyzerConfig, EcosystemAnalyzer, EcosystemReport};
pub use collaborators::{
    ArgumentExtractor, ArgumentSummary, ClusterLabeler, GapDetector, GapReport,
    DEFAULT_ARGUMENT_STRENGTH,
};
pub use error::{EngineError, Result};
pub use snapshot::{DiscussionSnapshot, OpinionRecord};
