//! Embedding collaborator seam and the built-in deterministic embedder.

use crate::error::Result;

/// Default vector width of the built-in embedder.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Maps text to fixed-length numeric vectors.
///
/// The pipeline owns exactly one embedder per run and injects it where
/// needed; there is no process-wide model singleton. Implementations back
/// this with whatever model they like, as long as `embed` is deterministic
/// within one run.
pub trait Embedder: Send + Sync {
    /// Length of the vectors this embedder produces.
    fn dimensions(&self) -> usize;

    /// Embed a single string.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch in one call.
    ///
    /// The ranking pass embeds all section texts through this method so
    /// every vector in one pass shares a single embedding context.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
}

/// Deterministic character-trigram hashing embedder.
///
/// Not a learned model: lowercased character trigrams are hashed into a
/// fixed number of buckets and counted. Lexically similar strings land on
/// nearby vectors, which is enough for relevance ordering when no model is
/// wired in, and keeps the pipeline fully offline and reproducible. Vectors
/// are raw counts, deliberately unnormalized, so dot product and cosine
/// genuinely differ.
pub struct HashedNgramEmbedder {
    dimensions: usize,
}

impl HashedNgramEmbedder {
    /// Create an embedder with the given vector width.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for HashedNgramEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIMENSIONS)
    }
}

impl Embedder for HashedNgramEmbedder {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dimensions];
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        if chars.is_empty() {
            return Ok(vector);
        }

        let window = 3.min(chars.len());
        for trigram in chars.windows(window) {
            // FNV-1a over the trigram's chars.
            let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
            for &c in trigram {
                hash ^= c as u64;
                hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
            }
            vector[(hash % self.dimensions as u64) as usize] += 1.0;
        }

        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_is_deterministic() {
        let embedder = HashedNgramEmbedder::default();
        let a = embedder.embed("find methods").unwrap();
        let b = embedder.embed("find methods").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_EMBEDDING_DIMENSIONS);
    }

    #[test]
    fn test_embed_empty_is_zero_vector() {
        let embedder = HashedNgramEmbedder::new(16);
        let v = embedder.embed("").unwrap();
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_similar_texts_share_buckets() {
        let embedder = HashedNgramEmbedder::default();
        let methods = embedder.embed("methods and materials").unwrap();
        let methods_too = embedder.embed("our methods").unwrap();
        let unrelated = embedder.embed("zebra quartz").unwrap();

        let overlap = |a: &[f32], b: &[f32]| -> f32 {
            a.iter().zip(b).map(|(x, y)| x * y).sum()
        };
        assert!(overlap(&methods, &methods_too) > overlap(&methods, &unrelated));
    }

    #[test]
    fn test_embed_batch_matches_single() {
        let embedder = HashedNgramEmbedder::new(32);
        let texts = vec!["one".to_string(), "two".to_string()];
        let batch = embedder.embed_batch(&texts).unwrap();
        assert_eq!(batch[0], embedder.embed("one").unwrap());
        assert_eq!(batch[1], embedder.embed("two").unwrap());
    }
}
