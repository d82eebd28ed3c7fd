//! Batch manifest input.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// One document entry in the batch manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestDocument {
    /// Filename, resolved against the pipeline's base directory
    #[serde(default)]
    pub filename: Option<String>,

    /// Optional display title, present in some manifests
    #[serde(default)]
    pub title: Option<String>,
}

/// The batch manifest: documents to process plus the ranking context.
///
/// `persona` and `job_to_be_done` accept any JSON shape; nested values are
/// flattened by [`crate::model::flatten_text`].
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Documents to extract sections from
    #[serde(default)]
    pub documents: Vec<ManifestDocument>,

    /// Persona description (string or nested structure)
    #[serde(default)]
    pub persona: Value,

    /// Job-to-be-done description (string or nested structure)
    #[serde(default)]
    pub job_to_be_done: Value,
}

impl Manifest {
    /// Load a manifest from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| Error::ManifestParse(e.to_string()))
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| Error::ManifestParse(e.to_string()))
    }

    /// All listed filenames, in manifest order.
    ///
    /// Entries without a filename are reported as "unknown"; this reflects
    /// the manifest as given, not which files resolved on disk.
    pub fn filenames(&self) -> Vec<String> {
        self.documents
            .iter()
            .map(|d| d.filename.clone().unwrap_or_else(|| "unknown".to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_from_json() {
        let manifest = Manifest::from_json(
            r#"{
                "documents": [{"filename": "a.pdf"}, {"filename": "b.pdf", "title": "B"}],
                "persona": "Travel Planner",
                "job_to_be_done": "Plan a 4-day trip"
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.filenames(), vec!["a.pdf", "b.pdf"]);
        assert_eq!(manifest.persona, Value::String("Travel Planner".into()));
    }

    #[test]
    fn test_manifest_missing_keys_default() {
        let manifest = Manifest::from_json("{}").unwrap();
        assert!(manifest.documents.is_empty());
        assert_eq!(manifest.persona, Value::Null);
    }

    #[test]
    fn test_manifest_entry_without_filename() {
        let manifest = Manifest::from_json(r#"{"documents": [{"title": "untitled"}]}"#).unwrap();
        assert_eq!(manifest.filenames(), vec!["unknown"]);
    }

    #[test]
    fn test_manifest_invalid_json() {
        let result = Manifest::from_json("not json");
        assert!(matches!(result, Err(Error::ManifestParse(_))));
    }

    #[test]
    fn test_manifest_not_found() {
        let result = Manifest::load("/no/such/manifest.json");
        assert!(matches!(result, Err(Error::ManifestNotFound(_))));
    }
}
