//! Context-aware relevance ranking over extracted sections.

use std::cmp::Ordering;

use crate::error::Result;
use crate::model::{RankedSection, Section};

use super::embedder::Embedder;
use super::method::RankMethod;

/// Ranks pooled sections against a persona + task context.
pub struct RelevanceRanker<'a> {
    embedder: &'a dyn Embedder,
}

impl<'a> RelevanceRanker<'a> {
    /// Create a ranker borrowing the run's embedder.
    pub fn new(embedder: &'a dyn Embedder) -> Self {
        Self { embedder }
    }

    /// Score every section against the context and order by relevance.
    ///
    /// The context is embedded once and all section texts (`"{title}
    /// {text}"`) go through a single batch call. The sort is stable and
    /// descending by score, so ties keep their pooling order under every
    /// method; `importance_rank` is the 1-based position in that order.
    ///
    /// An empty section list returns empty without touching the embedder.
    pub fn rank(
        &self,
        context_text: &str,
        sections: Vec<Section>,
        method: RankMethod,
    ) -> Result<Vec<RankedSection>> {
        if sections.is_empty() {
            return Ok(Vec::new());
        }

        let context = self.embedder.embed(context_text)?;
        let texts: Vec<String> = sections
            .iter()
            .map(|s| format!("{} {}", s.title, s.text))
            .collect();
        let embeddings = self.embedder.embed_batch(&texts)?;

        let mut scored: Vec<(Section, f32)> = sections
            .into_iter()
            .zip(embeddings)
            .map(|(section, vector)| {
                let score = method.score(&context, &vector);
                (section, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .enumerate()
            .map(|(i, (section, score))| RankedSection {
                section,
                importance_rank: (i + 1) as u32,
                relevance_score: score,
            })
            .collect())
    }
}
