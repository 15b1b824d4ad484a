//! TF-IDF embedding against a snapshot vocabulary.

use crate::embedder::Embedder;
use crate::normalize::normalize_l2;
use crate::vocabulary::{tokenize, Vocabulary};
use std::collections::HashMap;

/// Compute the TF-IDF vector for a single text.
///
/// Term frequency × IDF per vocabulary term (in vocabulary order),
/// truncated or zero-padded to `target_dim`, then L2-normalized. Terms
/// not in the vocabulary are silently dropped. When the text shares no
/// terms with the vocabulary the result is the all-zero vector.
///
/// The returned vector always has exactly `target_dim` entries, with
/// Euclidean norm ≈ 1 or exactly 0.
pub fn embed(text: &str, vocab: &Vocabulary, target_dim: usize) -> Vec<f64> {
    let mut tf: HashMap<&str, f64> = HashMap::new();
    let tokens = tokenize(text);
    for token in &tokens {
        *tf.entry(token.as_str()).or_insert(0.0) += 1.0;
    }

    let mut vec = vec![0.0; target_dim];
    for (i, term) in vocab.terms().iter().enumerate().take(target_dim) {
        if let Some(&freq) = tf.get(term.as_str()) {
            vec[i] = freq * vocab.idf()[i];
        }
    }

    normalize_l2(&mut vec);
    vec
}

/// Embed each text against a vocabulary built from `corpus`.
///
/// Corpus and texts may differ; out-of-vocabulary terms are silently
/// dropped.
pub fn generate_embeddings<S: AsRef<str>, C: AsRef<str>>(
    texts: &[S],
    corpus: &[C],
    target_dim: usize,
) -> Vec<Vec<f64>> {
    let vocab = Vocabulary::build(corpus);
    texts
        .iter()
        .map(|t| embed(t.as_ref(), &vocab, target_dim))
        .collect()
}

/// TF-IDF embedder over a fixed vocabulary snapshot.
///
/// # Example
///
/// ```rust
/// use agora_embeddings::{Embedder, TfIdfEmbedder, Vocabulary};
///
/// let vocab = Vocabulary::build(&["more bike lanes", "fewer car lanes"]);
/// let embedder = TfIdfEmbedder::new(vocab, 64);
/// let v = embedder.embed("bike lanes");
/// assert_eq!(v.len(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct TfIdfEmbedder {
    vocabulary: Vocabulary,
    dimension: usize,
}

impl TfIdfEmbedder {
    /// Create an embedder over the given vocabulary.
    pub fn new(vocabulary: Vocabulary, dimension: usize) -> Self {
        Self {
            vocabulary,
            dimension,
        }
    }

    /// Build the vocabulary from a corpus and embed against it.
    pub fn from_corpus<S: AsRef<str>>(corpus: &[S], dimension: usize) -> Self {
        Self::new(Vocabulary::build(corpus), dimension)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl Embedder for TfIdfEmbedder {
    fn embed(&self, text: &str) -> Vec<f64> {
        embed(text, &self.vocabulary, self.dimension)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: &[f64]) -> f64 {
        v.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    #[test]
    fn embedding_has_requested_dimension_and_unit_norm() {
        let vocab = Vocabulary::build(&["traffic calming works", "traffic grows anyway"]);
        for dim in [4, 64, 256] {
            let v = embed("traffic calming", &vocab, dim);
            assert_eq!(v.len(), dim);
            assert!((norm(&v) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn no_shared_terms_embeds_to_zero_vector() {
        let vocab = Vocabulary::build(&["traffic calming works"]);
        let v = embed("unrelated topic entirely", &vocab, 32);
        assert_eq!(v.len(), 32);
        assert_eq!(norm(&v), 0.0);
    }

    #[test]
    fn identical_texts_embed_identically() {
        let corpus = ["widen the road", "narrow the road", "close the road"];
        let vocab = Vocabulary::build(&corpus);
        assert_eq!(
            embed("close the road", &vocab, 64),
            embed("close the road", &vocab, 64)
        );
    }

    #[test]
    fn related_texts_are_more_similar_than_unrelated() {
        let corpus = [
            "cycling infrastructure reduces congestion",
            "bike lanes help cycling safety",
            "property taxes fund schools",
        ];
        let embedder = TfIdfEmbedder::from_corpus(&corpus, 64);
        let a = embedder.embed("cycling infrastructure reduces congestion");
        let b = embedder.embed("bike lanes help cycling safety");
        let c = embedder.embed("property taxes fund schools");

        let related = embedder.similarity(&a, &b);
        let unrelated = embedder.similarity(&a, &c);
        assert!(related > unrelated);
    }

    #[test]
    fn vocabulary_larger_than_dimension_truncates() {
        // 3 terms, dimension 2: only the first two lexicographic terms
        // contribute.
        let vocab = Vocabulary::build(&["alpha beta gamma"]);
        let v = embed("gamma", &vocab, 2);
        assert_eq!(v.len(), 2);
        assert_eq!(norm(&v), 0.0);
    }

    #[test]
    fn generate_embeddings_uses_separate_corpus() {
        let texts = ["bike lanes", "totally novel words"];
        let corpus = ["bike lanes everywhere", "no more lanes"];
        let vectors = generate_embeddings(&texts, &corpus, 32);
        assert_eq!(vectors.len(), 2);
        assert!((norm(&vectors[0]) - 1.0).abs() < 1e-9);
        // Second text shares nothing with the corpus vocabulary.
        assert_eq!(norm(&vectors[1]), 0.0);
    }
}
