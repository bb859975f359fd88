//! Extraction service: fetch, sniff, dispatch.
//!
//! One call is one sequential pass. The document is fetched, classified by
//! URL suffix and content type, and handed to the matching parser on a
//! blocking thread. Every failure comes back as a typed [`DocextError`];
//! there is no empty-string sentinel.

use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use crate::error::{DocextError, Result};
use crate::fetchers::HttpFetcher;
use crate::parsers::{DocxExtractor, PdfExtractor};
use crate::sniff::classify;
use crate::traits::fetcher::Fetcher;
use crate::traits::parser::DocumentParser;
use crate::types::config::ExtractionConfig;
use crate::types::document::{DocumentKind, ExtractedText};

/// Turns a document URL into its plain text.
///
/// # Example
///
/// ```rust,ignore
/// use docext::{ExtractionConfig, ExtractionService};
///
/// let service = ExtractionService::from_config(&ExtractionConfig::default())?;
/// let extracted = service.extract("https://example.com/report.pdf").await?;
/// println!("{} characters", extracted.character_count);
/// ```
#[derive(Clone)]
pub struct ExtractionService {
    fetcher: Arc<dyn Fetcher>,
    pdf: Arc<dyn DocumentParser>,
    docx: Arc<dyn DocumentParser>,
}

impl ExtractionService {
    /// Create a service around `fetcher` with the default parsers.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            pdf: Arc::new(PdfExtractor::new()),
            docx: Arc::new(DocxExtractor::new()),
        }
    }

    /// Create a service with an `HttpFetcher` and parsers built from `config`.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;

        let mut docx = DocxExtractor::new();
        if let Some(dir) = &config.staging_dir {
            docx = docx.with_staging_dir(dir);
        }

        Ok(Self::new(Arc::new(fetcher)).with_docx_parser(Arc::new(docx)))
    }

    /// Replace the PDF parser.
    pub fn with_pdf_parser(mut self, parser: Arc<dyn DocumentParser>) -> Self {
        self.pdf = parser;
        self
    }

    /// Replace the DOCX parser.
    pub fn with_docx_parser(mut self, parser: Arc<dyn DocumentParser>) -> Self {
        self.docx = parser;
        self
    }

    /// Fetch the document at `url` and extract its text.
    pub async fn extract(&self, url: &str) -> Result<ExtractedText> {
        let url = validate_url(url)?;

        info!(url = %url, fetcher = self.fetcher.name(), "Fetching document");
        let resource = self.fetcher.fetch(url).await?;
        if resource.was_redirected() {
            debug!(url = %url, final_url = %resource.final_url, "Document fetch was redirected");
        }

        let kind = classify(&resource.source_url, resource.content_type.as_deref());
        let parser = match kind {
            DocumentKind::Pdf => Arc::clone(&self.pdf),
            DocumentKind::Docx => Arc::clone(&self.docx),
            DocumentKind::Unsupported => {
                return Err(DocextError::UnsupportedType {
                    url: url.to_string(),
                    content_type: resource.content_type,
                });
            }
        };

        debug!(
            url = %url,
            kind = %kind,
            parser = parser.name(),
            bytes = resource.bytes.len(),
            "Dispatching document to parser"
        );

        let bytes = resource.bytes;
        let text = tokio::task::spawn_blocking(move || parser.extract(&bytes))
            .await
            .map_err(|e| DocextError::Unexpected(Box::new(e)))??;

        let extracted = ExtractedText::new(text);
        info!(
            url = %url,
            kind = %kind,
            characters = extracted.character_count,
            "Document text extracted"
        );

        Ok(extracted)
    }
}

/// Accept only non-empty absolute http(s) URLs. Returns the trimmed input.
pub fn validate_url(url: &str) -> Result<&str> {
    let trimmed = url.trim();
    let invalid = |reason: &str| DocextError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("URL is empty"));
    }

    let parsed = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed),
        other => Err(invalid(&format!("unsupported scheme: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExtractResult, ExtractionError, FetchError};
    use crate::fetchers::{FetchedResource, MockFailure, MockFetcher};
    use crate::testing::sample_pdf;

    /// Parser that records nothing and always returns fixed text.
    struct FixedParser(DocumentKind, &'static str);

    impl DocumentParser for FixedParser {
        fn kind(&self) -> DocumentKind {
            self.0
        }

        fn extract(&self, _bytes: &[u8]) -> ExtractResult<String> {
            Ok(self.1.to_string())
        }
    }

    struct PanickingParser;

    impl DocumentParser for PanickingParser {
        fn kind(&self) -> DocumentKind {
            DocumentKind::Pdf
        }

        fn extract(&self, _bytes: &[u8]) -> ExtractResult<String> {
            panic!("parser bug");
        }
    }

    fn service_with(mock: &MockFetcher) -> ExtractionService {
        ExtractionService::new(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_extracts_pdf_by_suffix() {
        let mock = MockFetcher::new().with_resource(FetchedResource::new(
            "https://example.com/a.pdf",
            sample_pdf(&["Hello"]).unwrap(),
        ));

        let extracted = service_with(&mock)
            .extract("https://example.com/a.pdf")
            .await
            .unwrap();

        assert_eq!(extracted, ExtractedText::new("Hello"));
        assert_eq!(extracted.character_count, 5);
    }

    #[tokio::test]
    async fn test_dispatches_by_content_type() {
        let mock = MockFetcher::new().with_resource(
            FetchedResource::new("https://example.com/download/7", b"docx bytes".to_vec())
                .with_content_type(crate::sniff::DOCX_MIME),
        );
        let service = service_with(&mock)
            .with_pdf_parser(Arc::new(FixedParser(DocumentKind::Pdf, "from pdf")))
            .with_docx_parser(Arc::new(FixedParser(DocumentKind::Docx, "from docx")));

        let extracted = service.extract("https://example.com/download/7").await.unwrap();

        assert_eq!(extracted.text, "from docx");
    }

    #[tokio::test]
    async fn test_suffix_priority_over_content_type() {
        let mock = MockFetcher::new().with_resource(
            FetchedResource::new("https://example.com/a.pdf", b"bytes".to_vec())
                .with_content_type(crate::sniff::DOCX_MIME),
        );
        let service = service_with(&mock)
            .with_pdf_parser(Arc::new(FixedParser(DocumentKind::Pdf, "from pdf")))
            .with_docx_parser(Arc::new(FixedParser(DocumentKind::Docx, "from docx")));

        let extracted = service.extract("https://example.com/a.pdf").await.unwrap();

        assert_eq!(extracted.text, "from pdf");
    }

    #[tokio::test]
    async fn test_unsupported_type() {
        let mock = MockFetcher::new().with_resource(
            FetchedResource::new("https://example.com/a.txt", b"plain".to_vec())
                .with_content_type("text/plain"),
        );

        let err = service_with(&mock)
            .extract("https://example.com/a.txt")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DocextError::UnsupportedType { ref content_type, .. }
                if content_type.as_deref() == Some("text/plain")
        ));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_malformed_pdf_is_extraction_error() {
        let mock = MockFetcher::new().with_resource(FetchedResource::new(
            "https://example.com/broken.pdf",
            b"definitely not a pdf".to_vec(),
        ));

        let err = service_with(&mock)
            .extract("https://example.com/broken.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, DocextError::Extraction(ExtractionError::Pdf(_))));
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let mock = MockFetcher::new().with_failure(
            "https://down.example.com/a.pdf",
            MockFailure::Connection("connection refused".into()),
        );

        let err = service_with(&mock)
            .extract("https://down.example.com/a.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, DocextError::Fetch(FetchError::Http(_))));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_invalid_url_never_fetches() {
        let mock = MockFetcher::new();
        let service = service_with(&mock);

        for url in ["", "   ", "not a url", "ftp://example.com/a.pdf", "/relative/a.pdf"] {
            let err = service.extract(url).await.unwrap_err();
            assert!(matches!(err, DocextError::InvalidUrl { .. }), "url: {:?}", url);
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_url_is_trimmed_before_fetch() {
        let mock = MockFetcher::new().with_resource(FetchedResource::new(
            "https://example.com/a.pdf",
            sample_pdf(&["Hello"]).unwrap(),
        ));

        service_with(&mock)
            .extract("  https://example.com/a.pdf \n")
            .await
            .unwrap();

        assert_eq!(mock.calls(), vec!["https://example.com/a.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_document_is_success_not_failure() {
        let mock = MockFetcher::new().with_resource(FetchedResource::new(
            "https://example.com/blank.pdf",
            b"irrelevant".to_vec(),
        ));
        let service = service_with(&mock)
            .with_pdf_parser(Arc::new(FixedParser(DocumentKind::Pdf, "")));

        let extracted = service.extract("https://example.com/blank.pdf").await.unwrap();

        assert!(extracted.is_empty());
    }

    #[tokio::test]
    async fn test_parser_panic_is_unexpected() {
        let mock = MockFetcher::new().with_resource(FetchedResource::new(
            "https://example.com/a.pdf",
            b"bytes".to_vec(),
        ));
        let service = service_with(&mock).with_pdf_parser(Arc::new(PanickingParser));

        let err = service.extract("https://example.com/a.pdf").await.unwrap_err();

        assert!(matches!(err, DocextError::Unexpected(_)));
    }
}
