//! Styled text span model.

use serde::{Deserialize, Serialize};

/// One styled run of text on a PDF page.
///
/// Spans are produced by the page source collaborator and carry just enough
/// typography to drive boundary detection: font name, weight, size, and the
/// baseline position used to approximate reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// The text content, trimmed
    pub text: String,

    /// Font name, lowercased (e.g. "helvetica-bold")
    pub font_name: String,

    /// Whether the font appears to be bold
    pub is_bold: bool,

    /// Baseline y in top-down page coordinates (smaller = higher on the page)
    pub baseline_y: f32,

    /// Font size in points (0.0 when the source did not report one)
    pub font_size: f32,
}

impl Span {
    /// Create a new span, deriving boldness from the font name.
    pub fn new(
        text: impl Into<String>,
        font_name: impl Into<String>,
        baseline_y: f32,
        font_size: f32,
    ) -> Self {
        let font_name = font_name.into().to_lowercase();
        let is_bold = font_name.contains("bold")
            || font_name.contains("black")
            || font_name.contains("heavy");

        Self {
            text: text.into(),
            font_name,
            is_bold,
            baseline_y,
            font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_bold_detection() {
        let span = Span::new("Overview", "Helvetica-Bold", 72.0, 14.0);
        assert!(span.is_bold);
        assert_eq!(span.font_name, "helvetica-bold");

        let span = Span::new("body text", "Times-Roman", 100.0, 11.0);
        assert!(!span.is_bold);
    }

    #[test]
    fn test_span_heavy_weight_counts_as_bold() {
        let span = Span::new("Title", "AvenirNext-Heavy", 50.0, 18.0);
        assert!(span.is_bold);
    }
}
