//! Ranking method selection and scoring functions.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Similarity/distance function used to score sections against the context.
///
/// A closed set: unknown tags are rejected at the parse boundary, before
/// any embedding work happens, so a configuration typo fails fast instead
/// of silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankMethod {
    /// Cosine similarity (higher = more relevant)
    #[default]
    Cosine,
    /// Raw dot product; unnormalized, favors longer/denser embeddings
    Dot,
    /// Negative Euclidean distance, so higher still means more relevant
    Euclidean,
}

impl RankMethod {
    /// Score a section vector against the context vector.
    pub fn score(&self, context: &[f32], section: &[f32]) -> f32 {
        match self {
            RankMethod::Cosine => cosine_similarity(context, section),
            RankMethod::Dot => dot_product(context, section),
            RankMethod::Euclidean => -euclidean_distance(context, section),
        }
    }

    /// The wire tag for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankMethod::Cosine => "cosine",
            RankMethod::Dot => "dot",
            RankMethod::Euclidean => "euclidean",
        }
    }
}

impl FromStr for RankMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "cosine" => Ok(RankMethod::Cosine),
            "dot" => Ok(RankMethod::Dot),
            "euclidean" => Ok(RankMethod::Euclidean),
            other => Err(Error::InvalidRankMethod(other.to_string())),
        }
    }
}

impl fmt::Display for RankMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dot product of two vectors.
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Cosine similarity; zero-magnitude inputs score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = dot_product(a, b);
    let norm_a = dot_product(a, a).sqrt();
    let norm_b = dot_product(b, b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Euclidean distance between two vectors.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
