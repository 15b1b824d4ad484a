//! Prelude for convenient imports.

pub use crate::analyzer::{AnalyzerConfig, EcosystemAnalyzer, EcosystemReport};
pub use crate::collaborators::{
    ArgumentExtractor, ArgumentSummary, ClusterLabeler, GapDetector, GapReport,
    DEFAULT_ARGUMENT_STRENGTH,
};
pub use crate::error::{EngineError, Result};
pub use crate::snapshot::{DiscussionSnapshot, OpinionRecord};
pub use agora_core::prelude::*;
