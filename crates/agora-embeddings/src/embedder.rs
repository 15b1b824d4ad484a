//! Core embedder trait.

use crate::normalize::cosine_similarity;

/// Trait for embedding providers.
///
/// Implementors convert text to fixed-length vectors for semantic
/// similarity. Embedding is total: text that shares no terms with the
/// backing vocabulary embeds to the all-zero vector rather than failing.
pub trait Embedder: Send + Sync {
    /// Embed a single text string into a vector of [`dimension`](Self::dimension) length.
    fn embed(&self, text: &str) -> Vec<f64>;

    /// Embed multiple texts.
    fn embed_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<f64>> {
        texts.iter().map(|t| self.embed(t.as_ref())).collect()
    }

    /// The embedding dimension.
    fn dimension(&self) -> usize;

    /// Cosine similarity between two vectors (0 on any zero-norm input).
    fn similarity(&self, a: &[f64], b: &[f64]) -> f64 {
        cosine_similarity(a, b)
    }
}
