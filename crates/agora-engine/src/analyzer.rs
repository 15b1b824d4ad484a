//! The ecosystem analysis pass.

use crate::collaborators::{
    ArgumentExtractor, ClusterLabeler, GapDetector, GapReport, DEFAULT_ARGUMENT_STRENGTH,
};
use crate::error::{EngineError, Result};
use crate::snapshot::DiscussionSnapshot;
use agora_cluster::{best_of_trials, find_optimal_k, ClusterResult, DEFAULT_MAX_K};
use agora_core::fitness::{calculate_fitness, landscape_stats, rank_by_fitness};
use agora_core::pheromone::aggregate_field;
use agora_core::quorum::{convergence_score, determine_phase, DEFAULT_CONVERGENCE_THRESHOLD};
use agora_core::types::{
    DiscussionId, FitnessInputs, LandscapeStats, Phase, PheromoneField, QuorumState,
};
use agora_embeddings::{euclidean_distance, generate_embeddings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Tuning knobs for one analyzer instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Embedding vector length.
    pub embedding_dim: usize,
    /// Upper bound for elbow-method k selection.
    pub max_k: usize,
    /// Independent k-means restarts per pass (lowest inertia wins).
    pub trials: usize,
    /// Largest-cluster fraction required to call the discussion
    /// converged.
    pub convergence_threshold: f64,
    /// Master seed; every randomized step derives from it, so a pass is
    /// reproducible for a fixed snapshot and config.
    pub seed: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            embedding_dim: 128,
            max_k: DEFAULT_MAX_K,
            trials: 4,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            seed: 0,
        }
    }
}

impl AnalyzerConfig {
    fn validate(&self) -> Result<()> {
        if self.embedding_dim == 0 {
            return Err(EngineError::InvalidConfig(
                "embedding_dim must be at least 1".to_string(),
            ));
        }
        if self.max_k == 0 {
            return Err(EngineError::InvalidConfig(
                "max_k must be at least 1".to_string(),
            ));
        }
        if self.trials == 0 {
            return Err(EngineError::InvalidConfig(
                "trials must be at least 1".to_string(),
            ));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "convergence_threshold must be a finite positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything one analysis pass produces.
///
/// The report is plain data; the host decides what to persist. Nothing
/// in it is authoritative state — the next pass recomputes all of it
/// from the then-current snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemReport {
    pub discussion_id: DiscussionId,
    pub clustering: ClusterResult,
    /// Cluster sizes; sums to the opinion count.
    pub cluster_sizes: Vec<usize>,
    /// One label slot per cluster, filled when a labeler is injected.
    pub cluster_labels: Vec<Option<String>>,
    /// Fitness score per opinion, aligned with the snapshot order.
    pub fitness_scores: Vec<f64>,
    /// Opinion indices in descending fitness order.
    pub ranking: Vec<usize>,
    pub landscape: LandscapeStats,
    pub pheromone_field: PheromoneField,
    pub quorum: QuorumState,
    /// The phase the discussion should advance to (at most one stage
    /// past the snapshot's phase).
    pub next_phase: Phase,
    /// Argumentation gaps from the external detector, when one ran.
    pub gaps: Vec<GapReport>,
}

/// Runs the full scoring/clustering/phase pass over discussion
/// snapshots.
///
/// Stateless across passes: the analyzer holds configuration and
/// injected collaborators, never discussion data. Dropping an in-flight
/// pass discards all of its intermediate results; the host's last
/// computed report stays untouched.
pub struct EcosystemAnalyzer {
    config: AnalyzerConfig,
    extractor: Option<Box<dyn ArgumentExtractor>>,
    labeler: Option<Box<dyn ClusterLabeler>>,
    gap_detector: Option<Box<dyn GapDetector>>,
}

impl EcosystemAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            extractor: None,
            labeler: None,
            gap_detector: None,
        })
    }

    /// Inject an argument-structure extractor.
    pub fn with_extractor(mut self, extractor: Box<dyn ArgumentExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Inject a cluster labeler.
    pub fn with_labeler(mut self, labeler: Box<dyn ClusterLabeler>) -> Self {
        self.labeler = Some(labeler);
        self
    }

    /// Inject a gap detector.
    pub fn with_gap_detector(mut self, detector: Box<dyn GapDetector>) -> Self {
        self.gap_detector = Some(detector);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run one full analysis pass over a snapshot.
    pub fn analyze(&self, snapshot: &DiscussionSnapshot) -> Result<EcosystemReport> {
        let texts: Vec<&str> = snapshot.opinions.iter().map(|o| o.body.as_str()).collect();
        debug!(
            discussion = ?snapshot.discussion_id,
            opinions = texts.len(),
            phase = %snapshot.phase,
            "starting analysis pass"
        );

        let embeddings = generate_embeddings(&texts, &texts, self.config.embedding_dim);
        let clustering = self.cluster(&embeddings)?;
        let cluster_sizes = clustering.cluster_sizes();
        let cluster_labels = self.label_clusters(&texts, &embeddings, &clustering);

        let (fitness_scores, pheromone_field) = self.score(snapshot)?;
        let ranking = rank_by_fitness(&fitness_scores);
        let landscape = landscape_stats(&fitness_scores);

        let quorum = QuorumState {
            phase: snapshot.phase,
            total_opinions: snapshot.opinions.len(),
            total_supports: snapshot.total_supports(),
            convergence_score: convergence_score(&cluster_sizes),
            cluster_sizes: cluster_sizes.clone(),
            avg_pheromone: pheromone_field.avg,
        };
        let next_phase = determine_phase(&quorum, self.config.convergence_threshold)?;

        let gaps = self
            .gap_detector
            .as_deref()
            .map(|d| d.detect(&texts))
            .unwrap_or_default();

        info!(
            discussion = ?snapshot.discussion_id,
            k = clustering.k,
            convergence = quorum.convergence_score,
            avg_pheromone = pheromone_field.avg,
            phase = %snapshot.phase,
            next_phase = %next_phase,
            "analysis pass complete"
        );

        Ok(EcosystemReport {
            discussion_id: snapshot.discussion_id,
            clustering,
            cluster_sizes,
            cluster_labels,
            fitness_scores,
            ranking,
            landscape,
            pheromone_field,
            quorum,
            next_phase,
            gaps,
        })
    }

    /// Elbow-method k selection followed by multi-trial k-means.
    fn cluster(&self, embeddings: &[Vec<f64>]) -> Result<ClusterResult> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let k = find_optimal_k(embeddings, self.config.max_k, &mut rng)?;
        debug!(k, trials = self.config.trials, "clustering embeddings");
        Ok(best_of_trials(
            embeddings,
            k,
            self.config.trials,
            self.config.seed,
        )?)
    }

    /// Per-opinion fitness plus the aggregated pheromone field.
    fn score(&self, snapshot: &DiscussionSnapshot) -> Result<(Vec<f64>, PheromoneField)> {
        let pheromones: Vec<_> = snapshot.opinions.iter().map(|o| o.pheromone).collect();
        let field = aggregate_field(&pheromones, snapshot.taken_at);

        let mut scores = Vec::with_capacity(snapshot.opinions.len());
        for opinion in &snapshot.opinions {
            let strength = self.argument_strength(opinion);
            let inputs = FitnessInputs::new(
                opinion.support_count,
                strength,
                opinion.rebuttal_count,
                snapshot.age_hours(opinion),
                opinion.pheromone.current_intensity(snapshot.taken_at),
            )?;
            scores.push(calculate_fitness(&inputs));
        }
        Ok((scores, field))
    }

    /// Argument strength for one opinion: a fresh extractor result wins,
    /// then the snapshot's stored scalar, then the neutral default. A
    /// misbehaving extractor (NaN, out of range) degrades to the default
    /// instead of failing the pass.
    fn argument_strength(&self, opinion: &crate::snapshot::OpinionRecord) -> f64 {
        let extracted = self
            .extractor
            .as_deref()
            .and_then(|e| e.extract(&opinion.body))
            .map(|summary| summary.strength);

        match extracted.or(opinion.argument_strength) {
            Some(s) if s.is_finite() => s.clamp(0.0, 1.0),
            _ => DEFAULT_ARGUMENT_STRENGTH,
        }
    }

    /// Ask the labeler for one label per cluster, using up to three
    /// members closest to the centroid as representatives.
    fn label_clusters(
        &self,
        texts: &[&str],
        embeddings: &[Vec<f64>],
        clustering: &ClusterResult,
    ) -> Vec<Option<String>> {
        let Some(labeler) = self.labeler.as_deref() else {
            return vec![None; clustering.k];
        };

        (0..clustering.k)
            .map(|c| {
                let mut members: Vec<usize> = clustering
                    .assignments
                    .iter()
                    .enumerate()
                    .filter(|(_, &a)| a == c)
                    .map(|(i, _)| i)
                    .collect();
                if members.is_empty() {
                    return None;
                }
                members.sort_by(|&a, &b| {
                    let da = euclidean_distance(&embeddings[a], &clustering.centroids[c]);
                    let db = euclidean_distance(&embeddings[b], &clustering.centroids[c]);
                    da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                });
                let representatives: Vec<&str> =
                    members.iter().take(3).map(|&i| texts[i]).collect();
                labeler.label(&representatives)
            })
            .collect()
    }
}
