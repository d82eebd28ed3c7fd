//! # docsieve
//!
//! Persona-driven section extraction and relevance ranking for PDF
//! collections.
//!
//! Given a JSON manifest naming a set of PDF documents, a persona, and a
//! job to be done, docsieve segments every page into titled sections using
//! layout cues (bold headers above their body text) and ranks the pooled
//! sections by how relevant they are to the persona's task, using text
//! embeddings. The output is a single JSON report listing the top-ranked
//! sections and their body text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsieve::{process_manifest, JsonFormat};
//!
//! fn main() -> docsieve::Result<()> {
//!     let report = process_manifest("challenge1b_input.json")?;
//!     println!("{}", report.to_json(JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! manifest.json ──► Manifest ──► Context (persona + task)
//!       │
//!       └─► per document: PDF ──► spans ──► BoundaryDetector ──► sections
//!                                                                   │
//!                        pooled sections ◄──────────────────────────┘
//!                              │
//!                              ▼
//!                    RelevanceRanker (Embedder + RankMethod)
//!                              │
//!                              ▼
//!                     Report (top-K, rank order)
//! ```
//!
//! ## Features
//!
//! - **Layout-driven segmentation**: Bold, short, non-numeric spans start
//!   sections; pages without headers fall back to a single section
//! - **Pluggable embeddings**: The [`Embedder`] trait injects any vector
//!   model; a deterministic trigram-hashing embedder ships by default
//! - **Three scoring methods**: Cosine, dot product, negative Euclidean
//! - **Resilient batches**: Missing or unreadable documents are logged
//!   and skipped, never failing the run

pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod rank;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{BoundaryDetector, DocumentSource, PageSource, SectionExtractor};
pub use model::{
    Context, ExtractedSection, JsonFormat, Manifest, ManifestDocument, RankedSection, Report,
    ReportMetadata, Section, Span, SubsectionAnalysis,
};
pub use normalize::TextNormalizer;
pub use pipeline::{Pipeline, PipelineOptions};
pub use rank::{Embedder, HashedNgramEmbedder, RankMethod, RelevanceRanker};

use std::path::{Path, PathBuf};

/// Process a manifest with default options and the built-in embedder.
///
/// # Example
///
/// ```no_run
/// use docsieve::process_manifest;
///
/// let report = process_manifest("challenge1b_input.json").unwrap();
/// println!("top sections: {}", report.extracted_sections.len());
/// ```
pub fn process_manifest<P: AsRef<Path>>(manifest_path: P) -> Result<Report> {
    Pipeline::new().run(manifest_path, &PipelineOptions::default())
}

/// Process a manifest with custom options.
///
/// # Example
///
/// ```no_run
/// use docsieve::{process_manifest_with_options, PipelineOptions, RankMethod};
///
/// let options = PipelineOptions::new()
///     .with_base_dir("/data/pdfs")
///     .with_top_k(3)
///     .with_rank_method(RankMethod::Dot);
/// let report = process_manifest_with_options("input.json", &options).unwrap();
/// ```
pub fn process_manifest_with_options<P: AsRef<Path>>(
    manifest_path: P,
    options: &PipelineOptions,
) -> Result<Report> {
    Pipeline::new().run(manifest_path, options)
}

/// Builder for configuring and running the pipeline.
///
/// # Example
///
/// ```no_run
/// use docsieve::{Docsieve, RankMethod};
///
/// let report = Docsieve::new()
///     .with_base_dir("./PDFs")
///     .with_top_k(5)
///     .with_rank_method(RankMethod::Cosine)
///     .run("challenge1b_input.json")?;
/// # Ok::<(), docsieve::Error>(())
/// ```
pub struct Docsieve {
    options: PipelineOptions,
    embedder: Option<Box<dyn Embedder>>,
}

impl Docsieve {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: PipelineOptions::default(),
            embedder: None,
        }
    }

    /// Set the directory manifest filenames resolve against.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_base_dir(dir);
        self
    }

    /// Set how many top-ranked sections the report keeps.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.options = self.options.with_top_k(top_k);
        self
    }

    /// Set the scoring function.
    pub fn with_rank_method(mut self, method: RankMethod) -> Self {
        self.options = self.options.with_rank_method(method);
        self
    }

    /// Supply a custom embedder instead of the built-in one.
    pub fn with_embedder(mut self, embedder: Box<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Extract documents on a thread pool.
    pub fn parallel(mut self) -> Self {
        self.options = self.options.with_parallel(true);
        self
    }

    /// Run the pipeline over the manifest at `manifest_path`.
    pub fn run<P: AsRef<Path>>(self, manifest_path: P) -> Result<Report> {
        let pipeline = match self.embedder {
            Some(embedder) => Pipeline::with_embedder(embedder),
            None => Pipeline::new(),
        };
        pipeline.run(manifest_path, &self.options)
    }
}

impl Default for Docsieve {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docsieve_builder_defaults() {
        let builder = Docsieve::new();
        assert_eq!(builder.options.base_dir, PathBuf::from("PDFs"));
        assert_eq!(builder.options.top_k, 5);
        assert!(builder.embedder.is_none());
    }

    #[test]
    fn test_docsieve_builder_chained() {
        let builder = Docsieve::new()
            .with_base_dir("/data")
            .with_top_k(10)
            .with_rank_method(RankMethod::Euclidean)
            .parallel();

        assert_eq!(builder.options.base_dir, PathBuf::from("/data"));
        assert_eq!(builder.options.top_k, 10);
        assert_eq!(builder.options.rank_method, RankMethod::Euclidean);
        assert!(builder.options.parallel);
    }

    #[test]
    fn test_docsieve_builder_custom_embedder() {
        let builder = Docsieve::new().with_embedder(Box::new(HashedNgramEmbedder::new(64)));
        assert!(builder.embedder.is_some());
    }

    #[test]
    fn test_process_manifest_missing_file() {
        let result = process_manifest("/no/such/manifest.json");
        assert!(matches!(result, Err(Error::ManifestNotFound(_))));
    }
}
