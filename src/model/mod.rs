//! Core data types for the extraction and ranking pipeline.

mod context;
mod manifest;
mod report;
mod section;
mod span;

pub use context::{flatten_text, Context};
pub use manifest::{Manifest, ManifestDocument};
pub use report::{ExtractedSection, JsonFormat, Report, ReportMetadata, SubsectionAnalysis};
pub use section::{RankedSection, Section};
pub use span::Span;
