//! Seams to external collaborators.
//!
//! Text extraction (OCR, PDF parsing) happens outside the core. The
//! `lingograde-extractors` crate provides implementations.

use async_trait::async_trait;

use crate::error::ExtractionError;
use crate::model::UploadedFile;

/// A service that turns an uploaded document into plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Short name for logs (e.g. "http").
    fn name(&self) -> &str;

    /// Extract the document's text. Must not report failure as empty text.
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError>;
}
