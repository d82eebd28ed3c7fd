//! Seams isolating the PDF-rendering collaborator.
//!
//! The extraction logic only sees [`Span`] sequences; everything about PDF
//! byte streams, fonts, and glyph runs lives behind these traits, so tests
//! can substitute in-memory pages and the concrete PDF library stays
//! swappable.

use std::path::Path;

use crate::error::Result;
use crate::model::Span;

/// Page-level access to one opened document.
pub trait PageSource: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// All text spans on a page (1-based), in no particular order.
    fn page_spans(&self, page: u32) -> Result<Vec<Span>>;
}

/// Opens documents by path.
///
/// The handle returned by `open` is released when dropped. The extractor
/// keeps it inside the per-document scope, so release happens exactly once
/// on every exit path, including error paths.
pub trait DocumentSource: Send + Sync {
    /// Whether the document exists and could be opened.
    fn exists(&self, path: &Path) -> bool;

    /// Open a document for page-by-page span access.
    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>>;
}
