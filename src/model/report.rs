//! Final report shapes and JSON serialization.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::RankedSection;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Report metadata describing the batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// All filenames listed in the manifest, in manifest order
    pub input_documents: Vec<String>,

    /// Flattened persona description
    pub persona: String,

    /// Flattened job-to-be-done description
    pub job_to_be_done: String,

    /// ISO-8601 local timestamp, captured once at report-build time
    pub processing_timestamp: String,
}

/// Identity of one top-ranked section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSection {
    /// Source document basename
    pub document: String,

    /// Section title
    pub section_title: String,

    /// 1-based relevance rank
    pub importance_rank: u32,

    /// Page number (1-indexed)
    pub page_number: u32,
}

/// Body text of one top-ranked section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsectionAnalysis {
    /// Source document basename
    pub document: String,

    /// Normalized section body text
    pub refined_text: String,

    /// Page number (1-indexed)
    pub page_number: u32,
}

/// The terminal output of one pipeline run. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub metadata: ReportMetadata,

    /// Top-K section identities, rank order
    pub extracted_sections: Vec<ExtractedSection>,

    /// Top-K section bodies, rank order
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}

impl Report {
    /// Create a report with populated metadata and empty section lists.
    pub fn empty(metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            extracted_sections: Vec::new(),
            subsection_analysis: Vec::new(),
        }
    }

    /// Project ranked sections into the two output shapes.
    pub fn from_ranked(metadata: ReportMetadata, ranked: &[RankedSection]) -> Self {
        let extracted_sections = ranked
            .iter()
            .map(|r| ExtractedSection {
                document: r.section.document.clone(),
                section_title: r.section.title.clone(),
                importance_rank: r.importance_rank,
                page_number: r.section.page,
            })
            .collect();

        let subsection_analysis = ranked
            .iter()
            .map(|r| SubsectionAnalysis {
                document: r.section.document.clone(),
                refined_text: r.section.text.clone(),
                page_number: r.section.page,
            })
            .collect();

        Self {
            metadata,
            extracted_sections,
            subsection_analysis,
        }
    }

    /// Serialize the report to JSON. Non-ASCII characters are preserved
    /// unescaped.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let result = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };

        result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            input_documents: vec!["a.pdf".to_string()],
            persona: "researcher".to_string(),
            job_to_be_done: "find methods".to_string(),
            processing_timestamp: "2026-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_report_empty() {
        let report = Report::empty(metadata());
        assert!(report.extracted_sections.is_empty());
        assert!(report.subsection_analysis.is_empty());
        assert_eq!(report.metadata.persona, "researcher");
    }

    #[test]
    fn test_report_from_ranked_projects_both_shapes() {
        let ranked = vec![RankedSection {
            section: Section::new("Methods", "We measured things carefully.", 2, "a.pdf"),
            importance_rank: 1,
            relevance_score: 0.9,
        }];
        let report = Report::from_ranked(metadata(), &ranked);

        assert_eq!(report.extracted_sections.len(), 1);
        assert_eq!(report.extracted_sections[0].section_title, "Methods");
        assert_eq!(report.extracted_sections[0].importance_rank, 1);
        assert_eq!(report.extracted_sections[0].page_number, 2);
        assert_eq!(
            report.subsection_analysis[0].refined_text,
            "We measured things carefully."
        );
    }

    #[test]
    fn test_to_json_pretty_preserves_non_ascii() {
        let mut meta = metadata();
        meta.persona = "café owner".to_string();
        let report = Report::empty(meta);

        let json = report.to_json(JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("café owner"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_to_json_compact() {
        let report = Report::empty(metadata());
        let json = report.to_json(JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"extracted_sections\":[]"));
    }
}
