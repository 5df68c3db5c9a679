//! Fixed-text extractor.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use lingograde_core::error::ExtractionError;
use lingograde_core::model::UploadedFile;
use lingograde_core::traits::TextExtractor;

/// Returns the same text for every document.
///
/// Useful when the text has already been extracted elsewhere, or in tests.
pub struct StaticExtractor {
    text: String,
}

impl StaticExtractor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read the text to return from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read text file: {}", path.display()))?;
        Ok(Self::new(text))
    }
}

#[async_trait]
impl TextExtractor for StaticExtractor {
    fn name(&self) -> &str {
        "static"
    }

    async fn extract(&self, _file: &UploadedFile) -> Result<String, ExtractionError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_fixed_text() {
        let extractor = StaticExtractor::new("Question 1: Fill in the blank.");
        let file = UploadedFile::new("a.png", "image/png", vec![1, 2, 3]);
        assert_eq!(
            extractor.extract(&file).await.unwrap(),
            "Question 1: Fill in the blank."
        );
    }

    #[test]
    fn from_missing_file_fails() {
        let err = StaticExtractor::from_file(Path::new("/nonexistent/text.txt"))
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("failed to read text file"));
    }

    #[tokio::test]
    async fn from_file_reads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        std::fs::write(&path, "hello").unwrap();

        let extractor = StaticExtractor::from_file(&path).unwrap();
        let file = UploadedFile::new("a.pdf", "application/pdf", vec![]);
        assert_eq!(extractor.extract(&file).await.unwrap(), "hello");
    }
}
