//! Embedding-based relevance ranking.

mod embedder;
mod method;
mod ranker;

pub use embedder::{Embedder, HashedNgramEmbedder, DEFAULT_EMBEDDING_DIMENSIONS};
pub use method::{cosine_similarity, dot_product, euclidean_distance, RankMethod};
pub use ranker::RelevanceRanker;
