//! Remote extraction service client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use lingograde_core::error::ExtractionError;
use lingograde_core::model::UploadedFile;
use lingograde_core::traits::TextExtractor;

const DEFAULT_BASE_URL: &str = "http://localhost:8090";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sends document bytes to an HTTP extraction service.
///
/// The service receives `POST {base_url}/extract` with the raw file as the
/// body, the declared media type as `content-type` and the file name in
/// `x-file-name`. It answers with `{"text": "..."}`.
pub struct HttpExtractor {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpExtractor {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self::with_timeout(
            base_url,
            api_key,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            timeout,
            client,
        }
    }
}

#[derive(Deserialize)]
struct ExtractResponse {
    text: String,
}

#[async_trait]
impl TextExtractor for HttpExtractor {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self, file), fields(file = %file.name, bytes = file.data.len()))]
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        let mut request = self
            .client
            .post(format!("{}/extract", self.base_url))
            .header("content-type", &file.media_type)
            .header("x-file-name", &file.name)
            .body(file.data.clone());

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ExtractionError::Timeout(self.timeout.as_secs_f64().ceil() as u64)
            } else if e.is_connect() {
                ExtractionError::NetworkError(format!(
                    "extraction service not reachable at {}",
                    self.base_url
                ))
            } else {
                ExtractionError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status == 415 {
            return Err(ExtractionError::UnsupportedMediaType(file.media_type.clone()));
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractionError::ServiceError {
                status,
                message: body,
            });
        }

        let body: ExtractResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::InvalidResponse(e.to_string()))?;

        tracing::debug!(chars = body.text.len(), "extraction complete");
        Ok(body.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pdf() -> UploadedFile {
        UploadedFile::new("unit1.pdf", "application/pdf", b"%PDF-1.4".to_vec())
    }

    #[tokio::test]
    async fn successful_extraction() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/extract"))
            .and(header("content-type", "application/pdf"))
            .and(header("x-file-name", "unit1.pdf"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"text": "Question 1: Fill in the blank."})),
            )
            .mount(&server)
            .await;

        let extractor = HttpExtractor::new(&server.uri(), None);
        let text = extractor.extract(&pdf()).await.unwrap();
        assert_eq!(text, "Question 1: Fill in the blank.");
    }

    #[tokio::test]
    async fn sends_bearer_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/extract"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"text": "ok"})))
            .mount(&server)
            .await;

        let extractor = HttpExtractor::new(&server.uri(), Some("secret".into()));
        assert_eq!(extractor.extract(&pdf()).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn server_error_is_transient() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/extract"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let extractor = HttpExtractor::new(&server.uri(), None);
        let err = extractor.extract(&pdf()).await.unwrap_err();
        match &err {
            ExtractionError::ServiceError { status, message } => {
                assert_eq!(*status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn unsupported_media_type() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/extract"))
            .respond_with(ResponseTemplate::new(415))
            .mount(&server)
            .await;

        let extractor = HttpExtractor::new(&server.uri(), None);
        let err = extractor.extract(&pdf()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedMediaType(ref m) if m == "application/pdf"));
    }

    #[tokio::test]
    async fn malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/extract"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let extractor = HttpExtractor::new(&server.uri(), None);
        let err = extractor.extract(&pdf()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/extract"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"text": "late"}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let extractor =
            HttpExtractor::with_timeout(&server.uri(), None, Duration::from_millis(500));
        let err = extractor.extract(&pdf()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Timeout(1)));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn unreachable_service() {
        let extractor = HttpExtractor::new("http://127.0.0.1:1", None);
        let err = extractor.extract(&pdf()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::NetworkError(_)));
    }
}
