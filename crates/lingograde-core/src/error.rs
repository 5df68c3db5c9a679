//! Extraction error types.
//!
//! Grading never fails: missing answers and unknown question types produce
//! zero-score results. The one failure that crosses the core boundary is a
//! text extraction failure, which must reach the caller as a distinct error
//! rather than as an empty analysis.

use thiserror::Error;

/// Errors raised while obtaining text from an uploaded document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The extractor did not answer within the configured time.
    #[error("text extraction timed out after {0}s")]
    Timeout(u64),

    /// The extraction service returned an error response.
    #[error("extraction service error (HTTP {status}): {message}")]
    ServiceError { status: u16, message: String },

    /// The extraction service could not be reached.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The extractor cannot handle this kind of document.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The service answered but the body was not usable.
    #[error("invalid extraction response: {0}")]
    InvalidResponse(String),
}

impl ExtractionError {
    /// Returns `true` if retrying the same request might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ExtractionError::Timeout(_) | ExtractionError::NetworkError(_) => true,
            ExtractionError::ServiceError { status, .. } => *status == 429 || *status >= 500,
            ExtractionError::UnsupportedMediaType(_) | ExtractionError::InvalidResponse(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(ExtractionError::Timeout(30).is_transient());
        assert!(ExtractionError::NetworkError("refused".into()).is_transient());
        assert!(ExtractionError::ServiceError {
            status: 503,
            message: "busy".into()
        }
        .is_transient());
        assert!(!ExtractionError::ServiceError {
            status: 400,
            message: "bad".into()
        }
        .is_transient());
        assert!(!ExtractionError::UnsupportedMediaType("video/mp4".into()).is_transient());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            ExtractionError::Timeout(5).to_string(),
            "text extraction timed out after 5s"
        );
        assert!(ExtractionError::ServiceError {
            status: 500,
            message: "boom".into()
        }
        .to_string()
        .contains("HTTP 500"));
    }
}
