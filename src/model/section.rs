//! Section models.

use serde::{Deserialize, Serialize};

/// A titled, page-scoped block of body text extracted from one document.
///
/// Sections are immutable once extracted; ranking produces [`RankedSection`]
/// records instead of mutating them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Header text this section was sliced under
    pub title: String,

    /// Normalized body text (always longer than 10 characters)
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,

    /// Basename of the source document
    pub document: String,
}

impl Section {
    /// Create a new section.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        page: u32,
        document: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            page,
            document: document.into(),
        }
    }
}

/// A section with its relevance ranking attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSection {
    /// The underlying extracted section
    pub section: Section,

    /// 1-based position in the relevance order (1 = most relevant)
    pub importance_rank: u32,

    /// Scalar score under the selected ranking method (higher = more relevant)
    pub relevance_score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_new() {
        let section = Section::new("Methods", "We measured things carefully.", 3, "paper.pdf");
        assert_eq!(section.title, "Methods");
        assert_eq!(section.page, 3);
        assert_eq!(section.document, "paper.pdf");
    }
}
