//! End-to-end batch pipeline: manifest in, ranked report out.

use std::path::{Path, PathBuf};

use chrono::Local;
use rayon::prelude::*;

use crate::error::Result;
use crate::extract::{DocumentSource, LopdfDocumentSource, SectionExtractor};
use crate::model::{Context, Manifest, Report, ReportMetadata, Section};
use crate::rank::{Embedder, HashedNgramEmbedder, RankMethod, RelevanceRanker};

/// Tuning knobs for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Directory manifest filenames are resolved against
    pub base_dir: PathBuf,

    /// How many top-ranked sections the report keeps
    pub top_k: usize,

    /// Scoring function for the ranking pass
    pub rank_method: RankMethod,

    /// Extract documents on a thread pool instead of sequentially.
    /// Pooling order is preserved either way; ranking is always serial.
    pub parallel: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("PDFs"),
            top_k: 5,
            rank_method: RankMethod::default(),
            parallel: false,
        }
    }
}

impl PipelineOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory manifest filenames resolve against.
    pub fn with_base_dir<P: Into<PathBuf>>(mut self, base_dir: P) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Set how many top-ranked sections the report keeps.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the scoring function.
    pub fn with_rank_method(mut self, method: RankMethod) -> Self {
        self.rank_method = method;
        self
    }

    /// Enable or disable parallel per-document extraction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// The two-stage pipeline: section extraction, then relevance ranking.
///
/// Owns its collaborators for the whole run; both the document opener and
/// the embedder are injected seams, so tests run entirely in memory.
pub struct Pipeline {
    embedder: Box<dyn Embedder>,
    source: Box<dyn DocumentSource>,
    extractor: SectionExtractor,
}

impl Pipeline {
    /// Pipeline with the default lopdf backend and the built-in embedder.
    pub fn new() -> Self {
        Self::with_parts(
            Box::new(HashedNgramEmbedder::default()),
            Box::new(LopdfDocumentSource),
        )
    }

    /// Pipeline with a caller-supplied embedder and the default backend.
    pub fn with_embedder(embedder: Box<dyn Embedder>) -> Self {
        Self::with_parts(embedder, Box::new(LopdfDocumentSource))
    }

    /// Pipeline with both collaborators supplied.
    pub fn with_parts(embedder: Box<dyn Embedder>, source: Box<dyn DocumentSource>) -> Self {
        Self {
            embedder,
            source,
            extractor: SectionExtractor::new(),
        }
    }

    /// Run the batch described by the manifest at `manifest_path`.
    ///
    /// Per-document failures (missing file, unreadable PDF) are logged and
    /// skipped; the run only fails on manifest errors, an invalid
    /// configuration, or an embedding error. The report's
    /// `input_documents` always lists every manifest entry, including
    /// skipped ones.
    pub fn run<P: AsRef<Path>>(&self, manifest_path: P, options: &PipelineOptions) -> Result<Report> {
        let manifest = Manifest::load(manifest_path)?;
        let context = Context::from_manifest(&manifest);

        log::info!(
            "processing {} document(s) from {}",
            manifest.documents.len(),
            options.base_dir.display()
        );

        let sections = self.extract_all(&manifest, options);
        log::info!("pooled {} section(s)", sections.len());

        let metadata = ReportMetadata {
            input_documents: manifest.filenames(),
            persona: context.persona.clone(),
            job_to_be_done: context.task.clone(),
            processing_timestamp: timestamp(),
        };

        if sections.is_empty() {
            return Ok(Report::empty(metadata));
        }

        let ranker = RelevanceRanker::new(self.embedder.as_ref());
        let ranked = ranker.rank(&context.text(), sections, options.rank_method)?;
        let kept = &ranked[..options.top_k.min(ranked.len())];

        Ok(Report::from_ranked(metadata, kept))
    }

    /// Extract sections from every resolvable manifest document, in
    /// manifest order.
    fn extract_all(&self, manifest: &Manifest, options: &PipelineOptions) -> Vec<Section> {
        let paths: Vec<PathBuf> = manifest
            .documents
            .iter()
            .filter_map(|d| d.filename.as_deref())
            .map(|name| options.base_dir.join(name))
            .collect();

        let extract_one = |path: &PathBuf| -> Vec<Section> {
            if !self.source.exists(path) {
                log::warn!("document not found, skipping: {}", path.display());
                return Vec::new();
            }
            match self.extractor.extract_path(self.source.as_ref(), path) {
                Ok(sections) => {
                    log::debug!("{}: {} section(s)", path.display(), sections.len());
                    sections
                }
                Err(e) => {
                    log::warn!("extraction failed, skipping: {}", e);
                    Vec::new()
                }
            }
        };

        if options.parallel {
            // collect() keeps input order, so pooling order matches the
            // sequential path.
            paths
                .par_iter()
                .map(extract_one)
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            paths.iter().flat_map(extract_one).collect()
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Local time in ISO-8601 with microsecond precision.
fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
