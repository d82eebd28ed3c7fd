//! Section boundary detection from styled spans.
//!
//! Works purely from typography and geometry: no PDF logical-structure
//! metadata is consulted, since it is frequently absent or unreliable.
//! A span is a header iff it is bold, longer than two characters, not
//! purely numeric, and not a bare decimal number like "3.2" — a cheap
//! three-signal filter that rejects footers, running heads, and section
//! numbering artifacts while accepting genuine titles.

use regex::Regex;

use crate::model::{Section, Span};
use crate::normalize::TextNormalizer;

/// Shortest body text (in characters, after normalization) a section may
/// carry; anything at or below this is discarded as noise.
const MIN_SECTION_CHARS: usize = 10;

/// A detected section header within a page's span list.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Index of the header span within the page's span sequence
    pub index: usize,
    /// Header text, used verbatim as the section title
    pub title: String,
}

/// Detects section headers on a page and slices content between them.
pub struct BoundaryDetector {
    normalizer: TextNormalizer,
    decimal: Regex,
}

impl BoundaryDetector {
    /// Create a detector with pre-compiled patterns.
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            decimal: Regex::new(r"^\d+\.\d*$").unwrap(),
        }
    }

    /// Whether a span qualifies as a section header.
    pub fn is_header_candidate(&self, span: &Span) -> bool {
        span.is_bold
            && span.text.chars().count() > 2
            && !span.text.chars().all(|c| c.is_numeric())
            && !self.decimal.is_match(&span.text)
    }

    /// Find all header spans, in page order.
    pub fn detect_headers(&self, spans: &[Span]) -> Vec<Header> {
        spans
            .iter()
            .enumerate()
            .filter(|(_, span)| self.is_header_candidate(span))
            .map(|(index, span)| Header {
                index,
                title: span.text.clone(),
            })
            .collect()
    }

    /// Slice a page's spans into header-scoped sections.
    ///
    /// Content for header `i` runs from the span after it to the next
    /// header (or end of page). Pages with no headers degrade to a single
    /// synthetic "Page {N} Content" section when they carry any text.
    pub fn sections_for_page(&self, spans: &[Span], page: u32, document: &str) -> Vec<Section> {
        let headers = self.detect_headers(spans);
        let mut sections = Vec::new();

        if headers.is_empty() {
            if !spans.is_empty() {
                // Fallback keeps every non-bold span, with no per-span
                // length floor.
                let joined = spans
                    .iter()
                    .filter(|s| !s.is_bold)
                    .map(|s| s.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let content = self.normalizer.clean(&joined);
                if content.chars().count() > MIN_SECTION_CHARS {
                    sections.push(Section::new(
                        format!("Page {} Content", page),
                        content,
                        page,
                        document,
                    ));
                }
            }
            return sections;
        }

        for (i, header) in headers.iter().enumerate() {
            let start = header.index + 1;
            let end = headers
                .get(i + 1)
                .map(|next| next.index)
                .unwrap_or(spans.len());

            let joined = spans[start..end]
                .iter()
                .filter(|s| !s.is_bold && s.text.trim().chars().count() > 1)
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let content = self.normalizer.clean(&joined);

            if content.chars().count() > MIN_SECTION_CHARS {
                sections.push(Section::new(header.title.clone(), content, page, document));
            }
        }

        sections
    }
}

impl Default for BoundaryDetector {
    fn default() -> Self {
        Self::new()
    }
}
