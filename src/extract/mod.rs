//! Layout-driven section extraction.

mod backend;
mod boundary;
mod extractor;
mod source;

pub use backend::{LopdfDocumentSource, LopdfPageSource};
pub use boundary::{BoundaryDetector, Header};
pub use extractor::SectionExtractor;
pub use source::{DocumentSource, PageSource};
