//! # Agora Embeddings
//!
//! TF-IDF text embeddings for the Agora opinion ecosystem.
//!
//! This crate turns opinion text into fixed-length numeric vectors
//! without any trained model or external API:
//! - Text → vector conversion (TF-IDF over a per-snapshot vocabulary)
//! - Similarity computation
//! - Vector normalization
//!
//! Every function is total: empty corpora, out-of-vocabulary text, and
//! zero-norm vectors produce documented neutral outputs, never errors.
//!
//! ## Usage
//!
//! ```rust
//! use agora_embeddings::{embed, Vocabulary};
//!
//! let corpus = ["cycling lanes reduce traffic", "traffic needs more lanes"];
//! let vocab = Vocabulary::build(&corpus);
//! let vector = embed("cycling reduces traffic", &vocab, 128);
//! assert_eq!(vector.len(), 128);
//! ```

mod embedder;
mod normalize;
mod tfidf;
mod vocabulary;

pub use embedder::Embedder;
pub use normalize::{cosine_similarity, dot_product, euclidean_distance, normalize_l2};
pub use tfidf::{embed, generate_embeddings, TfIdfEmbedder};
pub use vocabulary::{tokenize, Vocabulary};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{cosine_similarity, normalize_l2};
    pub use crate::{embed, generate_embeddings, TfIdfEmbedder};
    pub use crate::{Embedder, Vocabulary};
}
