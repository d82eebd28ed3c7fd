//! Per-document section extraction.

use std::cmp::Ordering;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Section;

use super::boundary::BoundaryDetector;
use super::source::{DocumentSource, PageSource};

/// Drives boundary detection page by page over one document.
pub struct SectionExtractor {
    detector: BoundaryDetector,
}

impl SectionExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self {
            detector: BoundaryDetector::new(),
        }
    }

    /// Extract sections from every page of an opened document.
    ///
    /// Spans are sorted by baseline ascending (top-to-bottom reading order)
    /// before boundary detection; the sort is stable, so same-baseline spans
    /// keep source order. A failing page is logged and skipped rather than
    /// failing the document.
    pub fn extract(&self, source: &dyn PageSource, document: &str) -> Result<Vec<Section>> {
        let mut sections = Vec::new();

        for page in 1..=source.page_count() {
            let mut spans = match source.page_spans(page) {
                Ok(spans) => spans,
                Err(e) => {
                    log::warn!("{}: failed to read page {}: {}", document, page, e);
                    continue;
                }
            };
            spans.sort_by(|a, b| {
                a.baseline_y
                    .partial_cmp(&b.baseline_y)
                    .unwrap_or(Ordering::Equal)
            });

            sections.extend(self.detector.sections_for_page(&spans, page, document));
        }

        Ok(sections)
    }

    /// Open `path` via `opener` and extract its sections.
    ///
    /// The document handle lives only inside this scope and is dropped
    /// exactly once on both the success and the error path.
    pub fn extract_path(
        &self,
        opener: &dyn DocumentSource,
        path: &Path,
    ) -> Result<Vec<Section>> {
        let document = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let source = opener.open(path).map_err(|e| Error::Extraction {
            document: document.clone(),
            message: e.to_string(),
        })?;

        self.extract(source.as_ref(), &document)
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Span;

    struct StubPages {
        pages: Vec<Vec<Span>>,
    }

    impl PageSource for StubPages {
        fn page_count(&self) -> u32 {
            self.pages.len() as u32
        }

        fn page_spans(&self, page: u32) -> Result<Vec<Span>> {
            self.pages
                .get((page - 1) as usize)
                .cloned()
                .ok_or_else(|| Error::PdfParse(format!("page {} out of range", page)))
        }
    }

    #[test]
    fn test_extract_sorts_spans_top_to_bottom() {
        // Header appears after the body in source order but above it on
        // the page; sorting must put it first.
        let pages = vec![vec![
            Span::new("body text below the header", "Times-Roman", 40.0, 11.0),
            Span::new("Findings", "Times-Bold", 10.0, 14.0),
        ]];
        let extractor = SectionExtractor::new();
        let sections = extractor
            .extract(&StubPages { pages }, "doc.pdf")
            .unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Findings");
        assert_eq!(sections[0].text, "body text below the header");
    }

    #[test]
    fn test_extract_tags_page_numbers() {
        let pages = vec![
            vec![Span::new("page one plain body text", "Times-Roman", 10.0, 11.0)],
            vec![
                Span::new("Summary", "Times-Bold", 10.0, 14.0),
                Span::new("page two summary body text", "Times-Roman", 20.0, 11.0),
            ],
        ];
        let extractor = SectionExtractor::new();
        let sections = extractor
            .extract(&StubPages { pages }, "doc.pdf")
            .unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Page 1 Content");
        assert_eq!(sections[0].page, 1);
        assert_eq!(sections[1].title, "Summary");
        assert_eq!(sections[1].page, 2);
    }
}
