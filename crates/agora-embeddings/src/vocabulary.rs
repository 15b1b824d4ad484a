//! Vocabulary and inverse-document-frequency weights.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// An ordered, deduplicated term list with one IDF weight per term.
///
/// Built once per corpus snapshot and immutable afterwards. Terms are
/// sorted lexicographically so vocabulary order is deterministic
/// regardless of corpus iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: Vec<String>,
    idf: Vec<f64>,
}

impl Vocabulary {
    /// Build a vocabulary from a document corpus.
    ///
    /// IDF for term t is `ln((N+1)/(df(t)+1)) + 1`, where N is the number
    /// of documents and df(t) the number of documents containing t at
    /// least once.
    pub fn build<S: AsRef<str>>(corpus: &[S]) -> Self {
        // BTreeMap keeps terms in lexicographic order for free.
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();

        for doc in corpus {
            let unique: HashSet<String> = tokenize(doc.as_ref()).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n = corpus.len() as f64;
        let mut terms = Vec::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (term, df) in doc_freq {
            idf.push(((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            terms.push(term);
        }

        Self { terms, idf }
    }

    /// Terms in lexicographic order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// IDF weights, aligned with [`terms`](Self::terms).
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Tokenize text into lowercased terms.
///
/// Characters that are neither letters nor digits (Unicode-aware) become
/// separators; tokens of length ≤ 1 are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() > 1)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_strips_punctuation() {
        let tokens = tokenize("Bike-lanes REDUCE traffic, right?");
        assert_eq!(tokens, vec!["bike", "lanes", "reduce", "traffic", "right"]);
    }

    #[test]
    fn tokenize_drops_single_character_tokens() {
        let tokens = tokenize("a bus or 2 trams");
        assert_eq!(tokens, vec!["bus", "or", "trams"]);
    }

    #[test]
    fn tokenize_handles_unicode_words() {
        let tokens = tokenize("Fahrräder überholen Autos");
        assert_eq!(tokens, vec!["fahrräder", "überholen", "autos"]);
    }

    #[test]
    fn vocabulary_terms_are_sorted_and_deduplicated() {
        let vocab = Vocabulary::build(&["zebra apple", "apple mango"]);
        assert_eq!(vocab.terms(), &["apple", "mango", "zebra"]);
    }

    #[test]
    fn vocabulary_is_invariant_under_corpus_order() {
        let a = Vocabulary::build(&["one two", "two three", "three four"]);
        let b = Vocabulary::build(&["three four", "one two", "two three"]);
        assert_eq!(a, b);
    }

    #[test]
    fn idf_follows_smoothed_formula() {
        // "apple" appears in both documents, "zebra" in one.
        let vocab = Vocabulary::build(&["apple zebra", "apple"]);
        let apple_idx = vocab.terms().iter().position(|t| t == "apple").unwrap();
        let zebra_idx = vocab.terms().iter().position(|t| t == "zebra").unwrap();

        let expected_apple = (3.0f64 / 3.0).ln() + 1.0;
        let expected_zebra = (3.0f64 / 2.0).ln() + 1.0;
        assert!((vocab.idf()[apple_idx] - expected_apple).abs() < 1e-12);
        assert!((vocab.idf()[zebra_idx] - expected_zebra).abs() < 1e-12);
    }

    #[test]
    fn vocabulary_round_trips_through_json() {
        let vocab = Vocabulary::build(&["apple zebra", "apple"]);
        let json = serde_json::to_string(&vocab).unwrap();
        let back: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(vocab, back);
    }

    #[test]
    fn empty_corpus_builds_empty_vocabulary() {
        let vocab = Vocabulary::build::<&str>(&[]);
        assert!(vocab.is_empty());
    }
}
