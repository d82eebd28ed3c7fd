//! Error types for docsieve.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docsieve operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing a document batch.
///
/// Manifest and ranking-configuration errors are fatal; per-document
/// failures are handled by the pipeline, which degrades the result set
/// instead of aborting the batch.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The batch manifest does not exist.
    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// The batch manifest is not valid JSON or has the wrong shape.
    #[error("Manifest parse error: {0}")]
    ManifestParse(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Section extraction failed for one document.
    #[error("Failed to extract sections from {document}: {message}")]
    Extraction {
        /// Basename of the failing document.
        document: String,
        /// Underlying failure description.
        message: String,
    },

    /// Unrecognized ranking method tag.
    #[error("Invalid ranking method: {0}")]
    InvalidRankMethod(String),

    /// The embedding collaborator failed.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Error serializing the report.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRankMethod("bogus".to_string());
        assert_eq!(err.to_string(), "Invalid ranking method: bogus");

        let err = Error::Extraction {
            document: "report.pdf".to_string(),
            message: "bad xref".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to extract sections from report.pdf: bad xref"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
